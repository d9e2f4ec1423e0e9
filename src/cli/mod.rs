//! CLI command definitions and dispatch
//!
//! Every subcommand is a thin consumer of the ledger store: it parses user
//! input, calls one store operation, and renders the result.

pub mod entry;
pub mod export;
pub mod report;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::{Settings, TallyPaths};
use crate::error::{TallyError, TallyResult};
use crate::models::Kind;
use crate::storage::LedgerStore;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a new entry
    Add {
        /// Entry kind: income or expense
        kind: String,
        /// Amount, e.g. "12.50"
        amount: String,
        /// Category label, e.g. "Dining"
        #[arg(short, long, default_value = "")]
        category: String,
        /// Entry date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Free-form note
        #[arg(short, long, default_value = "")]
        note: String,
    },

    /// List all entries in insertion order
    List,

    /// Search entries by date range, kind, and category
    Search {
        /// Inclusive start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Inclusive end date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Kind filter: income, expense, or all
        #[arg(short, long)]
        kind: Option<String>,
        /// Exact category match (blank for no restriction)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Replace fields of an existing entry
    Update {
        /// Id of the entry to replace
        id: String,
        /// New kind
        #[arg(long)]
        kind: Option<String>,
        /// New amount
        #[arg(long)]
        amount: Option<String>,
        /// New category
        #[arg(long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// New note
        #[arg(long)]
        note: Option<String>,
    },

    /// Delete an entry by id
    Delete {
        /// Id of the entry to delete
        id: String,
    },

    /// Show the total for one kind
    Total {
        /// income or expense
        kind: String,
    },

    /// Aggregated report for one kind
    Report {
        /// income or expense
        kind: String,
        /// Bucket by "month" or "category"
        #[arg(long, default_value = "month")]
        by: String,
    },

    /// Export entries to CSV or JSON
    Export {
        /// Output format: csv or json
        #[arg(short, long, default_value = "csv")]
        format: String,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Inclusive start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Inclusive end date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Kind filter: income, expense, or all
        #[arg(short, long)]
        kind: Option<String>,
        /// Exact category match
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show current configuration and paths
    Config,
}

/// Dispatch one parsed subcommand
pub fn handle_command(
    store: &mut LedgerStore,
    settings: &Settings,
    paths: &TallyPaths,
    command: Command,
) -> TallyResult<()> {
    match command {
        Command::Add {
            kind,
            amount,
            category,
            date,
            note,
        } => entry::add(store, settings, &kind, &amount, &category, date.as_deref(), &note),
        Command::List => entry::list(store, settings),
        Command::Search {
            from,
            to,
            kind,
            category,
        } => entry::search(
            store,
            settings,
            from.as_deref(),
            to.as_deref(),
            kind.as_deref(),
            category.as_deref(),
        ),
        Command::Update {
            id,
            kind,
            amount,
            category,
            date,
            note,
        } => entry::update(
            store,
            settings,
            &id,
            kind.as_deref(),
            amount.as_deref(),
            category.as_deref(),
            date.as_deref(),
            note.as_deref(),
        ),
        Command::Delete { id } => entry::delete(store, &id),
        Command::Total { kind } => report::total(store, settings, &kind),
        Command::Report { kind, by } => report::report(store, settings, &kind, &by),
        Command::Export {
            format,
            output,
            from,
            to,
            kind,
            category,
        } => export::export(
            store,
            &format,
            output.as_deref(),
            from.as_deref(),
            to.as_deref(),
            kind.as_deref(),
            category.as_deref(),
        ),
        Command::Config => config(store, settings, paths),
    }
}

fn config(store: &LedgerStore, settings: &Settings, paths: &TallyPaths) -> TallyResult<()> {
    println!("Base directory:  {}", paths.base_dir().display());
    println!("Ledger file:     {}", store.path().display());
    println!("Settings file:   {}", paths.settings_file().display());
    println!("Currency symbol: {}", settings.currency_symbol);
    println!("Date format:     {}", settings.date_format);
    println!("Entries:         {}", store.len());
    Ok(())
}

/// Parse a user-supplied ISO date
pub(crate) fn parse_date(s: &str) -> TallyResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| TallyError::Parse(format!("invalid date '{}' (expected YYYY-MM-DD)", s)))
}

/// Parse a kind filter where "all" (or nothing) means no restriction
pub(crate) fn parse_kind_filter(s: Option<&str>) -> TallyResult<Option<Kind>> {
    match s {
        None => Ok(None),
        Some(s) if s.trim().eq_ignore_ascii_case("all") => Ok(None),
        Some(s) => s.parse().map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-01-05").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()
        );
        assert!(parse_date("01/05/2025").is_err());
        assert!(parse_date("2025-13-01").is_err());
    }

    #[test]
    fn test_parse_kind_filter() {
        assert_eq!(parse_kind_filter(None).unwrap(), None);
        assert_eq!(parse_kind_filter(Some("all")).unwrap(), None);
        assert_eq!(parse_kind_filter(Some("ALL")).unwrap(), None);
        assert_eq!(parse_kind_filter(Some("income")).unwrap(), Some(Kind::Income));
        assert!(parse_kind_filter(Some("bogus")).is_err());
    }
}
