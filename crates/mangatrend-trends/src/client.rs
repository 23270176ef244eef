//! HTTP client for the Google Trends web API.
//!
//! Related queries take two calls per keyword: `explore` hands out a widget
//! token, then `widgetdata/relatedsearches` returns the ranked lists for it.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde_json::json;

use crate::error::TrendsError;
use crate::types::{strip_guard, ExploreResponse, RelatedSearchesResponse, SeedQuery, Widget};
use crate::TIMEFRAME;

const DEFAULT_BASE_URL: &str = "https://trends.google.com/";
const HOST_LANGUAGE: &str = "en-US";
const TZ_OFFSET: &str = "0";

/// Client for the Google Trends related-queries endpoints.
pub struct TrendsClient {
    client: Client,
    base_url: Url,
    inter_request_delay: Duration,
}

impl TrendsClient {
    /// Creates a client pointed at `trends.google.com`.
    ///
    /// `delay_ms` is the pause between seed terms in [`TrendsClient::fetch_rising`].
    ///
    /// # Errors
    ///
    /// Returns [`TrendsError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(timeout_secs: u64, user_agent: &str, delay_ms: u64) -> Result<Self, TrendsError> {
        Self::with_base_url(timeout_secs, user_agent, delay_ms, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`TrendsError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`TrendsError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        delay_ms: u64,
        base_url: &str,
    ) -> Result<Self, TrendsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .cookie_store(true)
            .build()?;

        // Keep exactly one trailing slash; endpoint paths are appended to it.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| TrendsError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            inter_request_delay: Duration::from_millis(delay_ms),
        })
    }

    /// Collects rising queries for every seed in `seeds`, pausing between
    /// seeds. At most `per_seed_limit` queries are kept from each seed.
    ///
    /// # Errors
    ///
    /// Returns the first error from any seed; later seeds are not requested.
    pub async fn fetch_rising(
        &self,
        seeds: &[&str],
        geo: &str,
        per_seed_limit: usize,
    ) -> Result<Vec<SeedQuery>, TrendsError> {
        self.warm_up(geo).await;

        let mut rows = Vec::new();
        for (i, seed) in seeds.iter().enumerate() {
            if i > 0 && !self.inter_request_delay.is_zero() {
                tokio::time::sleep(self.inter_request_delay).await;
            }
            let rising = self.rising_queries(seed, geo).await?;
            tracing::debug!(seed, geo, count = rising.len(), "fetched rising queries");
            rows.extend(
                rising
                    .into_iter()
                    .take(per_seed_limit)
                    .map(|(query, value)| SeedQuery {
                        query,
                        value,
                        seed: (*seed).to_string(),
                    }),
            );
        }
        Ok(rows)
    }

    /// Rising `(query, value)` pairs for one keyword over [`TIMEFRAME`].
    ///
    /// A keyword without a related-queries widget or without rising data
    /// yields an empty list.
    ///
    /// # Errors
    ///
    /// - [`TrendsError::RateLimited`] on HTTP 429.
    /// - [`TrendsError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`TrendsError::Deserialize`] if either body does not decode.
    pub async fn rising_queries(
        &self,
        keyword: &str,
        geo: &str,
    ) -> Result<Vec<(String, f64)>, TrendsError> {
        let explore_req = json!({
            "comparisonItem": [{"keyword": keyword, "geo": geo, "time": TIMEFRAME}],
            "category": 0,
            "property": "",
        });
        let explore_url = self.build_url(
            "trends/api/explore",
            &[("req", &explore_req.to_string())],
        );
        let body =
            Self::send(self.client.post(explore_url.clone()), keyword, &explore_url)
            .await?;
        let explore: ExploreResponse =
            serde_json::from_str(strip_guard(&body)).map_err(|e| TrendsError::Deserialize {
                context: format!("explore(keyword={keyword})"),
                source: e,
            })?;

        let Some(widget) = explore.widgets.into_iter().find(Widget::is_related_queries) else {
            tracing::debug!(keyword, geo, "no related-queries widget");
            return Ok(Vec::new());
        };
        let (Some(token), Some(request)) = (widget.token, widget.request) else {
            tracing::debug!(keyword, geo, "related-queries widget lacks token or request");
            return Ok(Vec::new());
        };

        let related_url = self.build_url(
            "trends/api/widgetdata/relatedsearches",
            &[("req", &request.to_string()), ("token", &token)],
        );
        let body =
            Self::send(self.client.get(related_url.clone()), keyword, &related_url)
            .await?;
        let related: RelatedSearchesResponse = serde_json::from_str(strip_guard(&body))
            .map_err(|e| TrendsError::Deserialize {
                context: format!("relatedsearches(keyword={keyword})"),
                source: e,
            })?;

        Ok(related
            .into_rising()
            .unwrap_or_default()
            .into_iter()
            .map(|k| (k.query.trim().to_string(), k.value))
            .collect())
    }

    /// Loads the landing page once so the cookie store holds a session cookie.
    /// Trends answers cookieless API calls with 429 more eagerly.
    async fn warm_up(&self, geo: &str) {
        let url = self.build_url("", &[("geo", geo)]);
        match self.client.get(url).send().await {
            Ok(resp) => tracing::debug!(status = %resp.status(), "trends session warm-up"),
            Err(e) => tracing::debug!(error = %e, "trends session warm-up failed"),
        }
    }

    fn build_url(&self, path: &str, extra: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(&format!("{}{path}", self.base_url.path()));
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("hl", HOST_LANGUAGE);
            pairs.append_pair("tz", TZ_OFFSET);
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    async fn send(
        request: reqwest::RequestBuilder,
        keyword: &str,
        url: &Url,
    ) -> Result<String, TrendsError> {
        let response = request.send().await?;
        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(TrendsError::RateLimited {
                keyword: keyword.to_owned(),
            });
        }
        if !status.is_success() {
            return Err(TrendsError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.path().to_owned(),
            });
        }
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> TrendsClient {
        TrendsClient::with_base_url(5, "test", 0, base_url).expect("client should build")
    }

    #[test]
    fn build_url_adds_locale_and_params() {
        let client = test_client("https://trends.google.com");
        let url = client.build_url("trends/api/explore", &[("req", "{}")]);
        assert_eq!(url.path(), "/trends/api/explore");
        let query = url.query().unwrap();
        assert!(query.starts_with("hl=en-US&tz=0&req="), "{query}");
    }

    #[test]
    fn build_url_keeps_base_path_prefix() {
        let client = test_client("http://localhost:9000/proxy/");
        let url = client.build_url("trends/api/explore", &[]);
        assert_eq!(url.path(), "/proxy/trends/api/explore");
    }

    #[test]
    fn build_url_encodes_json_request() {
        let client = test_client("https://trends.google.com");
        let url = client.build_url("trends/api/explore", &[("req", r#"{"k":"anime manga"}"#)]);
        assert!(!url.as_str().contains(' '), "{url}");
        let req = url
            .query_pairs()
            .find(|(k, _)| k == "req")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(req, r#"{"k":"anime manga"}"#);
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = TrendsClient::with_base_url(5, "test", 0, "::::");
        assert!(matches!(result, Err(TrendsError::InvalidBaseUrl { .. })));
    }
}
