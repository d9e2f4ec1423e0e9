//! Core data models for tally
//!
//! - [`Entry`]: one ledger transaction
//! - [`Kind`]: the income/expense classification
//! - [`Money`]: exact cent-based currency amounts
//! - [`EntryId`]: stable entry identity

pub mod entry;
pub mod money;

pub use entry::{Entry, EntryId, Kind};
pub use money::Money;
