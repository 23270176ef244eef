//! De-duplication and ranking of rising queries across seeds.

use std::collections::HashMap;

use mangatrend_core::{round2, PublicationStatus, SignalEntry, SignalSource};

use crate::types::SeedQuery;

/// Merges rising queries from every seed into at most `limit` entries.
///
/// Queries are keyed by trimmed text; the highest value wins and on equal
/// values the first one seen is kept. Output is sorted by value, highest
/// first, with first-seen order preserved on ties.
#[must_use]
pub fn merge_rising(rows: Vec<SeedQuery>, limit: usize) -> Vec<SignalEntry> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut best: Vec<SeedQuery> = Vec::new();

    for mut row in rows {
        row.query = row.query.trim().to_string();
        if row.query.is_empty() {
            continue;
        }
        match index.get(&row.query) {
            Some(&i) => {
                if row.value > best[i].value {
                    best[i] = row;
                }
            }
            None => {
                index.insert(row.query.clone(), best.len());
                best.push(row);
            }
        }
    }

    best.sort_by(|a, b| b.value.total_cmp(&a.value));
    best.truncate(limit);

    best.into_iter()
        .map(|row| SignalEntry {
            score: round2(row.value),
            // `{:?}` keeps the `.0` on whole values: `rising=900.0`.
            details: format!("seed={}, rising={:?}", row.seed, row.value),
            title: row.query,
            source: SignalSource::Trends,
            status: PublicationStatus::Unknown,
        })
        .collect()
}
