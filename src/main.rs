use anyhow::Result;
use clap::Parser;

use tally::cli::{handle_command, Command};
use tally::config::{paths::TallyPaths, settings::Settings};
use tally::storage::{LedgerStore, LoadStatus};

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Personal income/expense ledger for the command line",
    long_about = "tally keeps a dated ledger of income and expense entries in a \
                  single local file, with filtered search, running totals, and \
                  monthly or per-category reports."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TallyPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut store = LedgerStore::open(paths.ledger_file());
    if let LoadStatus::Recovered { reason } = store.load_status() {
        eprintln!(
            "warning: ledger file could not be read ({}); starting with an empty ledger",
            reason
        );
    }

    handle_command(&mut store, &settings, &paths, cli.command)?;
    Ok(())
}
