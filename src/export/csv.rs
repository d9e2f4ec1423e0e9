//! CSV export
//!
//! Renders entries as `date, kind, category, amount, note` rows. Exporters
//! consume the store's full listing or a search result; they hold no state.

use std::io::Write;

use crate::error::{TallyError, TallyResult};
use crate::models::Entry;

/// Write entries to CSV, one row per entry, in the order given
pub fn export_entries_csv<W: Write>(entries: &[Entry], writer: &mut W) -> TallyResult<()> {
    writeln!(writer, "Date,Kind,Category,Amount,Note")
        .map_err(|e| TallyError::Export(e.to_string()))?;

    for entry in entries {
        writeln!(
            writer,
            "{},{},{},{},{}",
            entry.date.format("%Y-%m-%d"),
            entry.kind,
            escape_csv(&entry.category),
            entry.amount.to_decimal_string(),
            escape_csv(&entry.note)
        )
        .map_err(|e| TallyError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Quote a CSV field when it contains commas, quotes, or newlines
fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
