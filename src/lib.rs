//! tally - Personal income/expense ledger for the command line
//!
//! This library provides the core functionality for the tally bookkeeping
//! application: a persistent, ordered collection of dated income and expense
//! entries with filtered queries and time-bucketed aggregation.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (entries, kinds, money)
//! - `storage`: The ledger store and its JSON file persistence
//! - `display`: Terminal formatting for listings and reports
//! - `export`: CSV/JSON export
//! - `cli`: Command-line subcommand handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use tally::storage::LedgerStore;
//!
//! let store = LedgerStore::open(paths.ledger_file());
//! let expenses = store.total(Kind::Expense);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod storage;

pub use error::{TallyError, TallyResult};
