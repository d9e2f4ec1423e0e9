//! JSON export
//!
//! Dumps entries as a pretty-printed JSON array, field-for-field identical
//! to the in-memory model.

use std::io::Write;

use crate::error::{TallyError, TallyResult};
use crate::models::Entry;

/// Write entries as a JSON array
pub fn export_entries_json<W: Write>(entries: &[Entry], writer: &mut W) -> TallyResult<()> {
    serde_json::to_writer_pretty(&mut *writer, entries)?;
    writeln!(writer).map_err(|e| TallyError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Kind, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_json_round_trips() {
        let entries = vec![Entry::new(
            Kind::Income,
            Money::from_cents(100000),
            "Bonus",
            NaiveDate::from_ymd_opt(2025, 2, 15).unwrap(),
            "year end",
        )];

        let mut out = Vec::new();
        export_entries_json(&entries, &mut out).unwrap();

        let back: Vec<Entry> = serde_json::from_slice(&out).unwrap();
        assert_eq!(back, entries);
    }
}
