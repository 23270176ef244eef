//! Merge and rank signals from every fetcher into dated rows.

use chrono::NaiveDate;

use crate::types::{ScoredEntry, SignalEntry};

/// Sorts entries by score, highest first, and stamps each with `date`.
///
/// The sort is stable: equal scores keep their input order, so catalog
/// entries placed before trends entries stay ahead of them on ties.
#[must_use]
pub fn rank_entries(mut entries: Vec<SignalEntry>, date: NaiveDate) -> Vec<ScoredEntry> {
    entries.sort_by(|a, b| b.score.total_cmp(&a.score));
    entries
        .into_iter()
        .map(|e| ScoredEntry {
            date,
            title: e.title,
            source: e.source,
            score: e.score,
            details: e.details,
            status: e.status,
        })
        .collect()
}
