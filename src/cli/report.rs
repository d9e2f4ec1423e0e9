//! Aggregation subcommand handlers: total and report

use crate::config::Settings;
use crate::display;
use crate::error::{TallyError, TallyResult};
use crate::models::Kind;
use crate::storage::LedgerStore;

pub fn total(store: &LedgerStore, settings: &Settings, kind: &str) -> TallyResult<()> {
    let kind: Kind = kind.parse()?;
    let total = store.total(kind);
    println!(
        "Total {}: {}",
        kind.to_string().to_lowercase(),
        total.format_with_symbol(&settings.currency_symbol)
    );
    Ok(())
}

pub fn report(store: &LedgerStore, settings: &Settings, kind: &str, by: &str) -> TallyResult<()> {
    let kind: Kind = kind.parse()?;
    let symbol = &settings.currency_symbol;

    match by.trim().to_ascii_lowercase().as_str() {
        "month" => {
            let summary = store.monthly_summary(kind);
            print!(
                "{}",
                display::format_summary("Monthly summary", kind, &summary, symbol)
            );
        }
        "category" => {
            let summary = store.category_summary(kind);
            print!(
                "{}",
                display::format_summary("Category summary", kind, &summary, symbol)
            );
        }
        other => {
            return Err(TallyError::Parse(format!(
                "invalid report bucket '{}' (expected 'month' or 'category')",
                other
            )))
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn test_total_rejects_bad_kind() {
        let temp_dir = TempDir::new().unwrap();
        let store = LedgerStore::open(temp_dir.path().join("ledger.json"));
        let settings = Settings::default();

        assert!(total(&store, &settings, "all").is_err());
        assert!(total(&store, &settings, "income").is_ok());
    }

    #[test]
    fn test_report_rejects_bad_bucket() {
        let temp_dir = TempDir::new().unwrap();
        let store = LedgerStore::open(temp_dir.path().join("ledger.json"));
        let settings = Settings::default();

        assert!(report(&store, &settings, "expense", "week").is_err());
        assert!(report(&store, &settings, "expense", "month").is_ok());
        assert!(report(&store, &settings, "expense", "category").is_ok());
    }
}
