use thiserror::Error;

/// Errors from the Google Trends client. The collector turns any of these
/// into an empty result.
#[derive(Debug, Error)]
pub enum TrendsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("rate limited by Google Trends while fetching \"{keyword}\"")]
    RateLimited { keyword: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid Google Trends base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
