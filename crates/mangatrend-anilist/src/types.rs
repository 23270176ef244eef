//! AniList response types.
//!
//! AniList wraps every GraphQL answer in `{"data": ..., "errors": [...]}`;
//! [`GraphqlResponse`] captures that envelope generically.

use mangatrend_core::TitleRecord;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(bound = "T: Deserialize<'de>")]
pub struct GraphqlResponse<T> {
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

/// `{ "Page": { "media": [...] } }`
#[derive(Debug, Deserialize)]
pub struct PageData {
    #[serde(rename = "Page")]
    pub page: Page,
}

#[derive(Debug, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub media: Vec<RawMediaItem>,
}

/// One manga entry as returned by the `Page.media` query.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMediaItem {
    pub id: i64,
    #[serde(default)]
    pub title: TitleRecord,
    #[serde(default)]
    pub trending: Option<i64>,
    #[serde(default)]
    pub popularity: Option<i64>,
    #[serde(default)]
    pub favourites: Option<i64>,
    /// Raw `MediaStatus` code, e.g. `"FINISHED"`.
    #[serde(default)]
    pub status: Option<String>,
}
