//! Best-effort trends collection for a run.

use mangatrend_core::SignalEntry;

use crate::client::TrendsClient;
use crate::merge::merge_rising;
use crate::SEED_TERMS;

/// Result of the trends stage. Never an error: trends data is optional.
#[derive(Debug, Clone, PartialEq)]
pub enum TrendsOutcome {
    Collected(Vec<SignalEntry>),
    /// A request failed; the run continues with catalog data only.
    Skipped { reason: String },
    /// Trends were turned off for this run.
    Disabled,
}

impl TrendsOutcome {
    /// Entries to merge; empty unless collected.
    #[must_use]
    pub fn into_entries(self) -> Vec<SignalEntry> {
        match self {
            TrendsOutcome::Collected(entries) => entries,
            TrendsOutcome::Skipped { .. } | TrendsOutcome::Disabled => Vec::new(),
        }
    }
}

/// Collects rising queries for all seed terms in `geo`, keeping `limit`.
///
/// Any failure (rate limit included) discards partial results and yields
/// [`TrendsOutcome::Skipped`].
pub async fn collect_trends(client: &TrendsClient, geo: &str, limit: usize) -> TrendsOutcome {
    match client.fetch_rising(&SEED_TERMS, geo, limit).await {
        Ok(rows) => {
            let entries = merge_rising(rows, limit);
            tracing::info!(geo, count = entries.len(), "collected trends entries");
            TrendsOutcome::Collected(entries)
        }
        Err(e) => {
            tracing::warn!(
                geo,
                source = "google_trends",
                error = %e,
                "trends fetch failed; continuing without trends"
            );
            TrendsOutcome::Skipped {
                reason: e.to_string(),
            }
        }
    }
}
