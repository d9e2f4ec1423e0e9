//! Export functionality
//!
//! CSV and JSON renderings of listings and search results.

pub mod csv;
pub mod json;

pub use csv::export_entries_csv;
pub use json::export_entries_json;
