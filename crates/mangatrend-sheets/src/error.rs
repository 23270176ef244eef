use thiserror::Error;

/// Errors from the Sheets client.
///
/// The config reader swallows these; auth and append failures abort the run.
#[derive(Debug, Error)]
pub enum SheetsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service-account key JSON is missing fields or is not JSON.
    #[error("invalid service account credentials: {0}")]
    Credentials(String),

    #[error("failed to sign token assertion: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("token exchange failed with status {status}: {body}")]
    Auth { status: u16, body: String },

    #[error("unexpected HTTP status {status} for range {range}")]
    UnexpectedStatus { status: u16, range: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid Sheets base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
