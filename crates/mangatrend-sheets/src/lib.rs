//! Google Sheets access: service-account auth, the run configuration
//! worksheet, and the append-only output worksheet.

pub mod auth;
pub mod client;
pub mod error;
pub mod rows;

pub use auth::ServiceAccountKey;
pub use client::SheetsClient;
pub use error::SheetsError;
pub use rows::entry_to_row;
