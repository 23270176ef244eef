//! HTTP client for the Google Sheets v4 `values` API.
//!
//! The client authenticates once in [`SheetsClient::connect`]; an auth
//! failure there is fatal to the run. Reads of the configuration worksheet
//! are best-effort, appends to the output worksheet are not.

use std::time::Duration;

use mangatrend_core::{RunConfig, ScoredEntry, SheetsCredentials};
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::{fetch_access_token, ServiceAccountKey};
use crate::error::SheetsError;
use crate::rows::entry_to_row;

const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com";

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppendResponse {
    #[serde(default)]
    updates: Option<AppendUpdates>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppendUpdates {
    #[serde(default)]
    updated_rows: Option<usize>,
}

/// Authenticated client bound to one spreadsheet.
pub struct SheetsClient {
    client: Client,
    base_url: Url,
    spreadsheet_id: String,
    access_token: String,
}

impl std::fmt::Debug for SheetsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetsClient")
            .field("base_url", &self.base_url.as_str())
            .field("spreadsheet_id", &"[redacted]")
            .field("access_token", &"[redacted]")
            .finish_non_exhaustive()
    }
}

impl SheetsClient {
    /// Authenticates against the public Sheets API.
    ///
    /// # Errors
    ///
    /// See [`SheetsClient::connect_with_base_url`].
    pub async fn connect(
        credentials: &SheetsCredentials,
        spreadsheet_id: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, SheetsError> {
        Self::connect_with_base_url(
            credentials,
            spreadsheet_id,
            timeout_secs,
            user_agent,
            DEFAULT_BASE_URL,
        )
        .await
    }

    /// Authenticates against a custom base URL (for testing with wiremock).
    ///
    /// A service-account key is exchanged for a token at its `token_uri`;
    /// a pre-issued token is used as is.
    ///
    /// # Errors
    ///
    /// - [`SheetsError::Credentials`] if the key JSON is invalid.
    /// - [`SheetsError::Jwt`] / [`SheetsError::Auth`] if the token exchange fails.
    /// - [`SheetsError::InvalidBaseUrl`] if `base_url` does not parse or cannot
    ///   carry a path.
    /// - [`SheetsError::Http`] on network failure.
    pub async fn connect_with_base_url(
        credentials: &SheetsCredentials,
        spreadsheet_id: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, SheetsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let parsed = Url::parse(base_url).map_err(|e| SheetsError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        // `values_url` appends path segments, which needs a hierarchical URL.
        if parsed.cannot_be_a_base() {
            return Err(SheetsError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "URL cannot carry a path".to_owned(),
            });
        }

        let access_token = match credentials {
            SheetsCredentials::AccessToken(token) => token.clone(),
            SheetsCredentials::ServiceAccountJson(raw) => {
                let key = ServiceAccountKey::from_json(raw)?;
                fetch_access_token(&client, &key).await?
            }
        };

        Ok(Self {
            client,
            base_url: parsed,
            spreadsheet_id: spreadsheet_id.to_owned(),
            access_token,
        })
    }

    /// Reads the run configuration from `worksheet`, falling back to defaults.
    ///
    /// The first row is a header. Any failure is logged and yields
    /// [`RunConfig::default`].
    pub async fn read_run_config(&self, worksheet: &str) -> RunConfig {
        match self.get_values(&a1_range(worksheet, "A", "B")).await {
            Ok(rows) => {
                let cfg = RunConfig::from_rows(rows.into_iter().skip(1));
                tracing::info!(
                    worksheet,
                    limit = cfg.limit,
                    country = %cfg.country,
                    "loaded run config"
                );
                cfg
            }
            Err(e) => {
                tracing::warn!(
                    worksheet,
                    error = %e,
                    "could not read config worksheet; using defaults"
                );
                RunConfig::default()
            }
        }
    }

    /// Appends `entries` to `worksheet` in order. Returns the row count sent.
    ///
    /// An empty slice sends nothing.
    ///
    /// # Errors
    ///
    /// - [`SheetsError::UnexpectedStatus`] on a non-2xx response.
    /// - [`SheetsError::Http`] on network failure.
    pub async fn append_entries(
        &self,
        worksheet: &str,
        entries: &[ScoredEntry],
    ) -> Result<usize, SheetsError> {
        if entries.is_empty() {
            tracing::info!(worksheet, "no rows to append");
            return Ok(0);
        }
        let rows: Vec<Vec<Value>> = entries.iter().map(entry_to_row).collect();
        let updated = self
            .append_values(&a1_range(worksheet, "A", "F"), rows)
            .await?;
        Ok(updated.unwrap_or(entries.len()))
    }

    /// `GET values/{range}` as a grid of formatted strings.
    ///
    /// # Errors
    ///
    /// - [`SheetsError::UnexpectedStatus`] on a non-2xx response (a missing
    ///   worksheet answers 400).
    /// - [`SheetsError::Http`] on network failure.
    /// - [`SheetsError::Deserialize`] if the body does not decode.
    pub async fn get_values(&self, range: &str) -> Result<Vec<Vec<String>>, SheetsError> {
        let url = self.values_url(range);
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SheetsError::UnexpectedStatus {
                status: status.as_u16(),
                range: range.to_owned(),
            });
        }

        let body = response.text().await?;
        let parsed: ValueRange =
            serde_json::from_str(&body).map_err(|e| SheetsError::Deserialize {
                context: format!("values.get({range})"),
                source: e,
            })?;
        Ok(parsed.values)
    }

    /// `POST values/{range}:append` with `USER_ENTERED` input.
    ///
    /// Returns `updates.updatedRows` when the response reports it.
    ///
    /// # Errors
    ///
    /// - [`SheetsError::UnexpectedStatus`] on a non-2xx response.
    /// - [`SheetsError::Http`] on network failure.
    pub async fn append_values(
        &self,
        range: &str,
        rows: Vec<Vec<Value>>,
    ) -> Result<Option<usize>, SheetsError> {
        let mut url = self.values_url(&format!("{range}:append"));
        url.query_pairs_mut()
            .append_pair("valueInputOption", "USER_ENTERED")
            .append_pair("insertDataOption", "INSERT_ROWS");

        let row_count = rows.len();
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.access_token)
            .json(&json!({ "values": rows }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SheetsError::UnexpectedStatus {
                status: status.as_u16(),
                range: range.to_owned(),
            });
        }

        let body = response.text().await?;
        let updated = serde_json::from_str::<AppendResponse>(&body)
            .ok()
            .and_then(|r| r.updates)
            .and_then(|u| u.updated_rows);
        tracing::debug!(range, sent = row_count, ?updated, "appended rows");
        Ok(updated)
    }

    fn values_url(&self, range: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["v4", "spreadsheets", self.spreadsheet_id.as_str(), "values", range]);
        }
        url
    }
}

/// Builds an A1 range over whole columns, quoting the worksheet name when
/// it contains anything besides ASCII letters, digits, or `_`.
#[must_use]
pub fn a1_range(worksheet: &str, first_col: &str, last_col: &str) -> String {
    let plain = !worksheet.is_empty()
        && worksheet
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if plain {
        format!("{worksheet}!{first_col}:{last_col}")
    } else {
        format!("'{}'!{first_col}:{last_col}", worksheet.replace('\'', "''"))
    }
}
