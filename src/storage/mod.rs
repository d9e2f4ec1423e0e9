//! Persistence layer
//!
//! The ledger store and its JSON file helpers. One file holds the whole
//! ledger under a versioned schema; every mutation rewrites it atomically.

pub mod file_io;
pub mod ledger;

pub use ledger::{EntryFilter, LedgerStore, LoadStatus};
