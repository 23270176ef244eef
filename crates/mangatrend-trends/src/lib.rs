//! Google Trends "rising related queries" collector.
//!
//! Probes a fixed set of seed terms, merges their rising queries, and hands
//! back best-effort signal entries. Failures never escape [`collect_trends`];
//! they become [`TrendsOutcome::Skipped`].

pub mod client;
pub mod collect;
pub mod error;
pub mod merge;
pub mod types;

pub use client::TrendsClient;
pub use collect::{collect_trends, TrendsOutcome};
pub use error::TrendsError;
pub use merge::merge_rising;
pub use types::SeedQuery;

/// Seed terms probed on every run, in request order.
pub const SEED_TERMS: [&str; 4] = ["manga", "manhwa", "webtoon", "anime manga"];

/// Trends timeframe for every request.
pub const TIMEFRAME: &str = "now 7-d";
