use thiserror::Error;

/// Errors returned by the AniList client. All of them abort a run.
#[derive(Debug, Error)]
pub enum AnilistError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from AniList")]
    UnexpectedStatus { status: u16 },

    /// The GraphQL envelope carried an `errors` array or no `data`.
    #[error("AniList API error: {0}")]
    Api(String),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid AniList endpoint \"{endpoint}\": {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}
