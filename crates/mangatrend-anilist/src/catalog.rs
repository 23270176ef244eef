//! Selection of catalog items and their conversion into signal entries.

use std::collections::HashSet;

use mangatrend_core::{catalog_score, normalize_status, pick_title, SignalEntry, SignalSource};

use crate::query::StatusFilter;
use crate::types::RawMediaItem;

/// Accumulates qualifying items up to `limit`, skipping ids already taken.
pub(crate) struct Selection {
    limit: usize,
    status_filter: Option<StatusFilter>,
    seen: HashSet<i64>,
    items: Vec<RawMediaItem>,
}

impl Selection {
    pub(crate) fn new(limit: usize, status_filter: Option<StatusFilter>) -> Self {
        Self {
            limit,
            status_filter,
            seen: HashSet::new(),
            items: Vec::new(),
        }
    }

    /// Takes items from `page` in order; returns how many were added.
    pub(crate) fn extend(&mut self, page: Vec<RawMediaItem>) -> usize {
        let before = self.items.len();
        for item in page {
            if self.is_full() {
                break;
            }
            if !self.qualifies(&item) || !self.seen.insert(item.id) {
                continue;
            }
            self.items.push(item);
        }
        self.items.len() - before
    }

    pub(crate) fn is_full(&self) -> bool {
        self.items.len() >= self.limit
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn into_entries(self) -> Vec<SignalEntry> {
        self.items.iter().map(to_signal).collect()
    }

    fn qualifies(&self, item: &RawMediaItem) -> bool {
        match self.status_filter {
            Some(StatusFilter::Local(status)) => item.status.as_deref() == Some(status.code()),
            _ => true,
        }
    }
}

/// Converts one AniList item into a catalog signal.
#[must_use]
pub fn to_signal(item: &RawMediaItem) -> SignalEntry {
    let trending = item.trending.unwrap_or(0);
    let popularity = item.popularity.unwrap_or(0);
    let favourites = item.favourites.unwrap_or(0);
    SignalEntry {
        title: pick_title(&item.title),
        source: SignalSource::Catalog,
        score: catalog_score(item.trending, item.popularity, item.favourites),
        details: format!("trending={trending}, pop={popularity}, fav={favourites}"),
        status: normalize_status(item.status.as_deref()),
    }
}
