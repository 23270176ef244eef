//! AniList GraphQL client and catalog fetch policy.

pub mod catalog;
pub mod client;
pub mod error;
pub mod query;
pub mod types;

pub use client::AnilistClient;
pub use error::AnilistError;
pub use query::{CatalogQuery, MediaSort, MediaStatus, StatusFilter};
pub use types::RawMediaItem;
