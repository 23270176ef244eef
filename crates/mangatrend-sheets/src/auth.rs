//! OAuth2 service-account flow for Google APIs.
//!
//! A short-lived RS256 JWT signed with the key's private key is exchanged at
//! the key's `token_uri` for a bearer access token.

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::error::SheetsError;

pub const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

/// The fields of a Google service-account key file this crate needs.
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

impl std::fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("client_email", &self.client_email)
            .field("private_key", &"[redacted]")
            .field("token_uri", &self.token_uri)
            .finish()
    }
}

impl ServiceAccountKey {
    /// Parses the raw key file contents.
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError::Credentials`] if the JSON is malformed or lacks
    /// `client_email` / `private_key`.
    pub fn from_json(raw: &str) -> Result<Self, SheetsError> {
        serde_json::from_str(raw).map_err(|e| SheetsError::Credentials(e.to_string()))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Claims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Signs the JWT assertion for `key`, issued at `now` (unix seconds).
pub(crate) fn build_assertion(key: &ServiceAccountKey, now: i64) -> Result<String, SheetsError> {
    let claims = Claims {
        iss: key.client_email.clone(),
        scope: SHEETS_SCOPE.to_string(),
        aud: key.token_uri.clone(),
        iat: now,
        exp: now + ASSERTION_LIFETIME_SECS,
    };
    let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())?;
    Ok(encode(&Header::new(Algorithm::RS256), &claims, &encoding_key)?)
}

/// Exchanges a signed assertion for an access token.
///
/// # Errors
///
/// - [`SheetsError::Jwt`] if the private key cannot sign.
/// - [`SheetsError::Auth`] if the token endpoint answers non-2xx.
/// - [`SheetsError::Http`] on network failure.
/// - [`SheetsError::Deserialize`] if the token response does not decode.
pub(crate) async fn fetch_access_token(
    client: &reqwest::Client,
    key: &ServiceAccountKey,
) -> Result<String, SheetsError> {
    let assertion = build_assertion(key, chrono::Utc::now().timestamp())?;

    let response = client
        .post(&key.token_uri)
        .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(SheetsError::Auth {
            status: status.as_u16(),
            body,
        });
    }

    let token: TokenResponse =
        serde_json::from_str(&body).map_err(|e| SheetsError::Deserialize {
            context: "token response".to_owned(),
            source: e,
        })?;
    tracing::debug!(client_email = %key.client_email, "obtained sheets access token");
    Ok(token.access_token)
}
