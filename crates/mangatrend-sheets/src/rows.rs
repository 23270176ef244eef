//! Row encoding for the output worksheet.

use mangatrend_core::ScoredEntry;
use serde_json::{json, Value};

/// Encodes one entry as `[date, title, source, score, details, status]`.
///
/// The score stays numeric so the sheet can sort and chart it.
#[must_use]
pub fn entry_to_row(entry: &ScoredEntry) -> Vec<Value> {
    vec![
        json!(entry.date_string()),
        json!(entry.title),
        json!(entry.source.as_str()),
        json!(entry.score),
        json!(entry.details),
        json!(entry.status.as_str()),
    ]
}
