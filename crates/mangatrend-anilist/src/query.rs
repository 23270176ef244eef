//! GraphQL document and the catalog query policy.

use serde::Serialize;

/// AniList caps `perPage` at 50.
pub const MAX_PER_PAGE: usize = 50;

pub(crate) const MEDIA_PAGE_QUERY: &str = r"
query ($page: Int, $perPage: Int, $sort: [MediaSort], $status: MediaStatus) {
  Page(page: $page, perPage: $perPage) {
    media(sort: $sort, type: MANGA, status: $status) {
      id
      title { romaji english native }
      trending
      popularity
      favourites
      status
    }
  }
}
";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaSort {
    TrendingDesc,
    PopularityDesc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaStatus {
    Finished,
    Releasing,
    NotYetReleased,
    Cancelled,
    Hiatus,
}

impl MediaStatus {
    /// The wire code AniList uses for this status.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            MediaStatus::Finished => "FINISHED",
            MediaStatus::Releasing => "RELEASING",
            MediaStatus::NotYetReleased => "NOT_YET_RELEASED",
            MediaStatus::Cancelled => "CANCELLED",
            MediaStatus::Hiatus => "HIATUS",
        }
    }
}

/// Where a status restriction is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    /// Sent as the `status` query argument.
    Source(MediaStatus),
    /// Applied to the returned page after the fetch.
    Local(MediaStatus),
}

impl StatusFilter {
    #[must_use]
    pub fn status(self) -> MediaStatus {
        match self {
            StatusFilter::Source(s) | StatusFilter::Local(s) => s,
        }
    }
}

/// Sort, filter, and fallback policy for one catalog fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogQuery {
    pub sort: MediaSort,
    pub status_filter: Option<StatusFilter>,
    pub fallback_enabled: bool,
}

impl CatalogQuery {
    /// Trending manga, any status.
    #[must_use]
    pub fn trending() -> Self {
        Self {
            sort: MediaSort::TrendingDesc,
            status_filter: None,
            fallback_enabled: false,
        }
    }

    /// Most popular finished manga, filtered by AniList.
    #[must_use]
    pub fn completed_source() -> Self {
        Self {
            sort: MediaSort::PopularityDesc,
            status_filter: Some(StatusFilter::Source(MediaStatus::Finished)),
            fallback_enabled: false,
        }
    }

    /// Trending manga filtered to finished ones after the fetch, topped up
    /// from the popularity ranking when too few qualify.
    #[must_use]
    pub fn completed_local() -> Self {
        Self {
            sort: MediaSort::TrendingDesc,
            status_filter: Some(StatusFilter::Local(MediaStatus::Finished)),
            fallback_enabled: true,
        }
    }

    #[must_use]
    pub fn with_fallback(mut self, enabled: bool) -> Self {
        self.fallback_enabled = enabled;
        self
    }

    pub(crate) fn primary_variables(&self, limit: usize) -> PageVariables {
        let per_page = match self.status_filter {
            Some(StatusFilter::Local(_)) => MAX_PER_PAGE,
            _ => limit.clamp(1, MAX_PER_PAGE),
        };
        PageVariables {
            page: 1,
            per_page,
            sort: vec![self.sort],
            status: match self.status_filter {
                Some(StatusFilter::Source(s)) => Some(s),
                _ => None,
            },
        }
    }

    pub(crate) fn fallback_variables(&self) -> PageVariables {
        PageVariables {
            page: 1,
            per_page: MAX_PER_PAGE,
            sort: vec![MediaSort::PopularityDesc],
            status: self.status_filter.map(StatusFilter::status),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageVariables {
    pub page: u32,
    pub per_page: usize,
    pub sort: Vec<MediaSort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MediaStatus>,
}
