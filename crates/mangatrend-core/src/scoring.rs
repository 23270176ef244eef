//! Title selection, catalog scoring, and status normalization.

use crate::types::{PublicationStatus, TitleRecord};

const TRENDING_WEIGHT: f64 = 2.0;
const POPULARITY_WEIGHT: f64 = 0.01;
const FAVOURITES_WEIGHT: f64 = 0.05;

/// Picks the display title: english, then romaji, then native, else `""`.
///
/// Whitespace-only values count as empty.
#[must_use]
pub fn pick_title(title: &TitleRecord) -> String {
    [&title.english, &title.romaji, &title.native]
        .into_iter()
        .filter_map(|t| t.as_deref().map(str::trim))
        .find(|t| !t.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// Rounds to two decimal places, half away from zero.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Ranking score for a catalog item. Missing signals count as zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn catalog_score(trending: Option<i64>, popularity: Option<i64>, favourites: Option<i64>) -> f64 {
    let trending = trending.unwrap_or(0) as f64;
    let popularity = popularity.unwrap_or(0) as f64;
    let favourites = favourites.unwrap_or(0) as f64;
    round2(
        trending * TRENDING_WEIGHT + popularity * POPULARITY_WEIGHT + favourites * FAVOURITES_WEIGHT,
    )
}

/// Maps an AniList `MediaStatus` code to a display state.
#[must_use]
pub fn normalize_status(code: Option<&str>) -> PublicationStatus {
    match code {
        Some("FINISHED") => PublicationStatus::Completed,
        Some("RELEASING") => PublicationStatus::Ongoing,
        Some("HIATUS") => PublicationStatus::Hiatus,
        _ => PublicationStatus::Unknown,
    }
}
