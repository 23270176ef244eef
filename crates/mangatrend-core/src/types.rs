//! Domain types shared by the fetchers, the ranker, and the sheet sink.

use std::fmt;

use chrono::NaiveDate;
use serde::Deserialize;

/// Default number of catalog entries collected per run.
pub const DEFAULT_LIMIT: usize = 30;

/// Default Google Trends region.
pub const DEFAULT_COUNTRY: &str = "MA";

/// Multi-locale title as returned by the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TitleRecord {
    #[serde(default)]
    pub romaji: Option<String>,
    #[serde(default)]
    pub english: Option<String>,
    #[serde(default)]
    pub native: Option<String>,
}

/// Which upstream produced a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalSource {
    Catalog,
    Trends,
}

impl SignalSource {
    /// Label written to the output sheet.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SignalSource::Catalog => "AniList",
            SignalSource::Trends => "GoogleTrends",
        }
    }
}

impl fmt::Display for SignalSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display-level publication state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicationStatus {
    Completed,
    Ongoing,
    Hiatus,
    Unknown,
}

impl PublicationStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PublicationStatus::Completed => "Completed",
            PublicationStatus::Ongoing => "Ongoing",
            PublicationStatus::Hiatus => "Hiatus",
            PublicationStatus::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for PublicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized record from one fetcher, before the run date is attached.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalEntry {
    pub title: String,
    pub source: SignalSource,
    pub score: f64,
    pub details: String,
    pub status: PublicationStatus,
}

/// A ranked, dated row ready for the sink.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredEntry {
    pub date: NaiveDate,
    pub title: String,
    pub source: SignalSource,
    pub score: f64,
    pub details: String,
    pub status: PublicationStatus,
}

impl ScoredEntry {
    /// The run date as written to the sheet (`YYYY-MM-DD`).
    #[must_use]
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Per-run settings read from the configuration worksheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub limit: usize,
    pub country: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            country: DEFAULT_COUNTRY.to_string(),
        }
    }
}

impl RunConfig {
    /// Applies `key`/`value` rows (header already removed) over the defaults.
    ///
    /// `country` needs a non-empty value; `limit` needs a positive all-digit
    /// value. Anything else is ignored.
    #[must_use]
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: AsRef<[String]>,
    {
        let mut cfg = Self::default();
        for row in rows {
            let [key, value, ..] = row.as_ref() else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();
            match key {
                "country" if !value.is_empty() => cfg.country = value.to_string(),
                "limit" if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) => {
                    if let Ok(limit) = value.parse::<usize>() {
                        if limit > 0 {
                            cfg.limit = limit;
                        }
                    }
                }
                _ => {}
            }
        }
        cfg
    }
}
