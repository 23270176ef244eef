//! Integration tests for `AnilistClient::fetch_catalog` using wiremock.

use mangatrend_anilist::{AnilistClient, AnilistError, CatalogQuery};
use mangatrend_core::{PublicationStatus, SignalSource};
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(endpoint: &str) -> AnilistClient {
    AnilistClient::with_endpoint(5, "mangatrend-test/0.1", endpoint)
        .expect("client construction should not fail")
}

fn media(id: i64, english: &str, trending: i64, status: &str) -> Value {
    json!({
        "id": id,
        "title": {"romaji": null, "english": english, "native": null},
        "trending": trending,
        "popularity": 0,
        "favourites": 0,
        "status": status
    })
}

fn page(items: Vec<Value>) -> Value {
    json!({"data": {"Page": {"media": items}}})
}

#[tokio::test]
async fn trending_query_returns_scored_entries() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({
            "variables": {"page": 1, "perPage": 2, "sort": ["TRENDING_DESC"]}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![
            media(1, "Alpha", 20, "RELEASING"),
            media(2, "Beta", 6, "FINISHED"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let entries = client
        .fetch_catalog(&CatalogQuery::trending(), 2)
        .await
        .expect("should fetch catalog");

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].title, "Alpha");
    assert!((entries[0].score - 40.0).abs() < 1e-9);
    assert_eq!(entries[0].status, PublicationStatus::Ongoing);
    assert_eq!(entries[1].status, PublicationStatus::Completed);
    assert!(entries.iter().all(|e| e.source == SignalSource::Catalog));
}

#[tokio::test]
async fn trending_query_truncates_to_limit() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![
            media(1, "A", 3, "RELEASING"),
            media(2, "B", 2, "RELEASING"),
            media(3, "C", 1, "RELEASING"),
        ])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let entries = client
        .fetch_catalog(&CatalogQuery::trending(), 2)
        .await
        .unwrap();
    assert_eq!(entries.len(), 2);
}

#[tokio::test]
async fn completed_source_sends_status_argument() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "variables": {"sort": ["POPULARITY_DESC"], "status": "FINISHED"}
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(vec![media(9, "Done", 1, "FINISHED")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let entries = client
        .fetch_catalog(&CatalogQuery::completed_source(), 10)
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].status, PublicationStatus::Completed);
}

#[tokio::test]
async fn local_filter_falls_back_for_the_shortfall() {
    let server = MockServer::start().await;

    // Primary: two finished titles among ongoing ones.
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"variables": {"sort": ["TRENDING_DESC"]}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![
            media(1, "Finished One", 10, "FINISHED"),
            media(2, "Ongoing", 9, "RELEASING"),
            media(3, "Finished Three", 8, "FINISHED"),
            media(4, "Hiatus", 7, "HIATUS"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    // Fallback repeats both primary picks; only new ids may be used.
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "variables": {"sort": ["POPULARITY_DESC"], "status": "FINISHED"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![
            media(3, "Finished Three", 8, "FINISHED"),
            media(10, "Pop Ten", 0, "FINISHED"),
            media(1, "Finished One", 10, "FINISHED"),
            media(11, "Pop Eleven", 0, "FINISHED"),
            media(12, "Pop Twelve", 0, "FINISHED"),
            media(13, "Pop Thirteen", 0, "FINISHED"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let entries = client
        .fetch_catalog(&CatalogQuery::completed_local(), 5)
        .await
        .expect("should fetch catalog");

    let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "Finished One",
            "Finished Three",
            "Pop Ten",
            "Pop Eleven",
            "Pop Twelve"
        ]
    );
    assert!(entries
        .iter()
        .all(|e| e.status == PublicationStatus::Completed));
}

#[tokio::test]
async fn fallback_is_skipped_when_disabled() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({"variables": {"sort": ["TRENDING_DESC"]}})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(vec![media(1, "Only", 1, "FINISHED")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({"variables": {"sort": ["POPULARITY_DESC"]}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![])))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let query = CatalogQuery::completed_local().with_fallback(false);
    let entries = client.fetch_catalog(&query, 5).await.unwrap();
    assert_eq!(entries.len(), 1);
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_catalog(&CatalogQuery::trending(), 5).await;
    assert!(
        matches!(result, Err(AnilistError::UnexpectedStatus { status: 500 })),
        "got {result:?}"
    );
}

#[tokio::test]
async fn graphql_errors_are_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{"message": "Invalid token"}]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_catalog(&CatalogQuery::trending(), 5).await;
    assert!(matches!(result, Err(AnilistError::Api(ref m)) if m == "Invalid token"));
}
