//! Export subcommand handler

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{TallyError, TallyResult};
use crate::export::{export_entries_csv, export_entries_json};
use crate::storage::LedgerStore;

use super::entry::build_filter;

#[allow(clippy::too_many_arguments)]
pub fn export(
    store: &LedgerStore,
    format: &str,
    output: Option<&Path>,
    from: Option<&str>,
    to: Option<&str>,
    kind: Option<&str>,
    category: Option<&str>,
) -> TallyResult<()> {
    let filter = build_filter(from, to, kind, category)?;
    let entries = store.search(&filter);

    match output {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| TallyError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
            let mut writer = BufWriter::new(file);
            write_entries(&entries, format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| TallyError::Export(e.to_string()))?;
            println!("Exported {} entries to {}", entries.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_entries(&entries, format, &mut writer)?;
        }
    }

    Ok(())
}

fn write_entries<W: Write>(
    entries: &[crate::models::Entry],
    format: &str,
    writer: &mut W,
) -> TallyResult<()> {
    match format.trim().to_ascii_lowercase().as_str() {
        "csv" => export_entries_csv(entries, writer),
        "json" => export_entries_json(entries, writer),
        other => Err(TallyError::Export(format!(
            "invalid export format '{}' (expected 'csv' or 'json')",
            other
        ))),
    }
}
