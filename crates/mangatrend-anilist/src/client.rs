//! HTTP client for the AniList GraphQL API.
//!
//! Every request is a single POST of `{query, variables}`. Non-2xx statuses,
//! GraphQL `errors`, and undecodable bodies surface as [`AnilistError`];
//! nothing is retried.

use std::time::Duration;

use mangatrend_core::SignalEntry;
use reqwest::{Client, Url};
use serde_json::json;

use crate::catalog::Selection;
use crate::error::AnilistError;
use crate::query::{CatalogQuery, PageVariables, MEDIA_PAGE_QUERY};
use crate::types::{GraphqlResponse, PageData, RawMediaItem};

const DEFAULT_ENDPOINT: &str = "https://graphql.anilist.co";

/// Client for the AniList GraphQL endpoint.
///
/// Use [`AnilistClient::new`] for production or
/// [`AnilistClient::with_endpoint`] to point at a mock server in tests.
pub struct AnilistClient {
    client: Client,
    endpoint: Url,
}

impl AnilistClient {
    /// Creates a client pointed at the public AniList endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AnilistError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, AnilistError> {
        Self::with_endpoint(timeout_secs, user_agent, DEFAULT_ENDPOINT)
    }

    /// Creates a client with a custom endpoint (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`AnilistError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`AnilistError::InvalidEndpoint`] if `endpoint` is not a valid URL.
    pub fn with_endpoint(
        timeout_secs: u64,
        user_agent: &str,
        endpoint: &str,
    ) -> Result<Self, AnilistError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        let endpoint = Url::parse(endpoint).map_err(|e| AnilistError::InvalidEndpoint {
            endpoint: endpoint.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Self { client, endpoint })
    }

    /// Fetches up to `limit` catalog entries according to `query`.
    ///
    /// The primary page is filtered and de-duplicated by media id. When fewer
    /// than `limit` items qualify and the query allows it, a popularity-sorted
    /// fallback page supplies the remainder.
    ///
    /// # Errors
    ///
    /// - [`AnilistError::Http`] on network failure or timeout.
    /// - [`AnilistError::UnexpectedStatus`] on a non-2xx response.
    /// - [`AnilistError::Api`] if AniList reports GraphQL errors.
    /// - [`AnilistError::Deserialize`] if the body does not match the schema.
    pub async fn fetch_catalog(
        &self,
        query: &CatalogQuery,
        limit: usize,
    ) -> Result<Vec<SignalEntry>, AnilistError> {
        let mut selection = Selection::new(limit, query.status_filter);

        let primary = self.fetch_page(&query.primary_variables(limit)).await?;
        let fetched = primary.len();
        selection.extend(primary);
        tracing::debug!(
            sort = ?query.sort,
            fetched,
            kept = selection.len(),
            "fetched primary catalog page"
        );

        if !selection.is_full() && query.fallback_enabled {
            let fallback = self.fetch_page(&query.fallback_variables()).await?;
            let added = selection.extend(fallback);
            tracing::info!(
                added,
                total = selection.len(),
                limit,
                "filled catalog shortfall from popularity fallback"
            );
        }

        Ok(selection.into_entries())
    }

    /// Runs the media page query with the given variables.
    async fn fetch_page(
        &self,
        variables: &PageVariables,
    ) -> Result<Vec<RawMediaItem>, AnilistError> {
        let payload = json!({
            "query": MEDIA_PAGE_QUERY,
            "variables": variables,
        });

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnilistError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        parse_page(&body)
    }
}

/// Decodes a GraphQL response body into its media list.
fn parse_page(body: &str) -> Result<Vec<RawMediaItem>, AnilistError> {
    let envelope: GraphqlResponse<PageData> =
        serde_json::from_str(body).map_err(|e| AnilistError::Deserialize {
            context: "Page.media response".to_owned(),
            source: e,
        })?;

    if !envelope.errors.is_empty() {
        let messages: Vec<&str> = envelope.errors.iter().map(|e| e.message.as_str()).collect();
        return Err(AnilistError::Api(messages.join("; ")));
    }

    envelope
        .data
        .map(|d| d.page.media)
        .ok_or_else(|| AnilistError::Api("response carried no data".to_owned()))
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
