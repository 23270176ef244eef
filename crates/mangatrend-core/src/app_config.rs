/// How the Sheets client obtains an access token.
#[derive(Clone, PartialEq, Eq)]
pub enum SheetsCredentials {
    /// Raw service-account key JSON; exchanged for a token at run time.
    ServiceAccountJson(String),
    /// A pre-issued OAuth bearer token.
    AccessToken(String),
}

impl std::fmt::Debug for SheetsCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetsCredentials::ServiceAccountJson(_) => {
                f.write_str("ServiceAccountJson([redacted])")
            }
            SheetsCredentials::AccessToken(_) => f.write_str("AccessToken([redacted])"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub sheet_id: String,
    pub sheets_credentials: SheetsCredentials,
    pub log_level: String,
    pub anilist_url: String,
    pub trends_url: String,
    pub sheets_url: String,
    pub request_timeout_secs: u64,
    pub trends_delay_ms: u64,
    pub user_agent: String,
    pub config_sheet: String,
    pub output_sheet: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("sheet_id", &"[redacted]")
            .field("sheets_credentials", &self.sheets_credentials)
            .field("log_level", &self.log_level)
            .field("anilist_url", &self.anilist_url)
            .field("trends_url", &self.trends_url)
            .field("sheets_url", &self.sheets_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("trends_delay_ms", &self.trends_delay_ms)
            .field("user_agent", &self.user_agent)
            .field("config_sheet", &self.config_sheet)
            .field("output_sheet", &self.output_sheet)
            .finish()
    }
}
