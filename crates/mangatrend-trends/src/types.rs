//! Google Trends response types.
//!
//! Both endpoints prefix their JSON with an anti-XSSI guard such as `)]}'`;
//! [`strip_guard`] removes it before decoding.

use serde::Deserialize;

/// A rising query tagged with the seed term that surfaced it.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedQuery {
    pub query: String,
    pub value: f64,
    pub seed: String,
}

/// `explore` response: the widgets available for one comparison.
#[derive(Debug, Deserialize)]
pub struct ExploreResponse {
    #[serde(default)]
    pub widgets: Vec<Widget>,
}

#[derive(Debug, Deserialize)]
pub struct Widget {
    pub id: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub request: Option<serde_json::Value>,
}

impl Widget {
    pub(crate) fn is_related_queries(&self) -> bool {
        self.id.starts_with("RELATED_QUERIES")
    }
}

/// `widgetdata/relatedsearches` response.
#[derive(Debug, Deserialize)]
pub struct RelatedSearchesResponse {
    pub default: RankedLists,
}

/// `rankedList[0]` is "top", `rankedList[1]` is "rising".
#[derive(Debug, Deserialize)]
pub struct RankedLists {
    #[serde(rename = "rankedList", default)]
    pub ranked_list: Vec<RankedList>,
}

#[derive(Debug, Deserialize)]
pub struct RankedList {
    #[serde(rename = "rankedKeyword", default)]
    pub ranked_keyword: Vec<RankedKeyword>,
}

#[derive(Debug, Deserialize)]
pub struct RankedKeyword {
    pub query: String,
    pub value: f64,
}

impl RelatedSearchesResponse {
    /// The rising list, or `None` when Trends returned no rising data.
    #[must_use]
    pub fn into_rising(self) -> Option<Vec<RankedKeyword>> {
        self.default
            .ranked_list
            .into_iter()
            .nth(1)
            .map(|l| l.ranked_keyword)
            .filter(|k| !k.is_empty())
    }
}

/// Drops everything before the first `{`.
pub(crate) fn strip_guard(body: &str) -> &str {
    body.find('{').map_or(body, |i| &body[i..])
}
