//! Entry subcommand handlers: add, list, search, update, delete

use chrono::Local;

use crate::config::Settings;
use crate::display;
use crate::error::{TallyError, TallyResult};
use crate::models::{Entry, EntryId, Kind, Money};
use crate::storage::{EntryFilter, LedgerStore};

use super::{parse_date, parse_kind_filter};

#[allow(clippy::too_many_arguments)]
pub fn add(
    store: &mut LedgerStore,
    settings: &Settings,
    kind: &str,
    amount: &str,
    category: &str,
    date: Option<&str>,
    note: &str,
) -> TallyResult<()> {
    let kind: Kind = kind.parse()?;
    let amount = Money::parse(amount)?;
    let date = match date {
        Some(s) => parse_date(s)?,
        None => Local::now().date_naive(),
    };

    let entry = Entry::new(kind, amount, category, date, note);
    entry.validate()?;

    let id = entry.id;
    store.add(entry)?;

    println!(
        "Added {} entry {} ({})",
        kind.to_string().to_lowercase(),
        id.short(),
        amount.format_with_symbol(&settings.currency_symbol)
    );
    Ok(())
}

pub fn list(store: &LedgerStore, settings: &Settings) -> TallyResult<()> {
    let symbol = &settings.currency_symbol;
    print!(
        "{}",
        display::format_entry_table(store.entries(), symbol, &settings.date_format)
    );
    print!(
        "{}",
        display::format_totals(store.total(Kind::Income), store.total(Kind::Expense), symbol)
    );
    Ok(())
}

pub fn search(
    store: &LedgerStore,
    settings: &Settings,
    from: Option<&str>,
    to: Option<&str>,
    kind: Option<&str>,
    category: Option<&str>,
) -> TallyResult<()> {
    let filter = build_filter(from, to, kind, category)?;
    let result = store.search(&filter);
    print!(
        "{}",
        display::format_entry_table(&result, &settings.currency_symbol, &settings.date_format)
    );
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn update(
    store: &mut LedgerStore,
    settings: &Settings,
    id: &str,
    kind: Option<&str>,
    amount: Option<&str>,
    category: Option<&str>,
    date: Option<&str>,
    note: Option<&str>,
) -> TallyResult<()> {
    let id: EntryId = id.parse()?;

    let old = store
        .get(id)
        .cloned()
        .ok_or_else(|| TallyError::Validation(format!("no entry with id {}", id)))?;

    // Replacement keeps the stable id; unspecified fields carry over
    let replacement = Entry {
        id: old.id,
        kind: match kind {
            Some(s) => s.parse()?,
            None => old.kind,
        },
        amount: match amount {
            Some(s) => Money::parse(s)?,
            None => old.amount,
        },
        category: category.map(str::to_string).unwrap_or(old.category),
        date: match date {
            Some(s) => parse_date(s)?,
            None => old.date,
        },
        note: note.map(str::to_string).unwrap_or(old.note),
    };
    replacement.validate()?;

    store.update(id, replacement.clone())?;
    println!(
        "Updated entry {} ({})",
        id.short(),
        replacement
            .amount
            .format_with_symbol(&settings.currency_symbol)
    );
    Ok(())
}

pub fn delete(store: &mut LedgerStore, id: &str) -> TallyResult<()> {
    let id: EntryId = id.parse()?;

    if store.delete(id)? {
        println!("Deleted entry {}", id.short());
    } else {
        println!("No entry with id {}; nothing deleted", id.short());
    }
    Ok(())
}

pub(crate) fn build_filter(
    from: Option<&str>,
    to: Option<&str>,
    kind: Option<&str>,
    category: Option<&str>,
) -> TallyResult<EntryFilter> {
    let mut filter = EntryFilter::new();
    if let Some(s) = from {
        filter = filter.from_date(parse_date(s)?);
    }
    if let Some(s) = to {
        filter = filter.to_date(parse_date(s)?);
    }
    if let Some(kind) = parse_kind_filter(kind)? {
        filter = filter.kind(kind);
    }
    if let Some(c) = category {
        filter = filter.category(c);
    }
    Ok(filter)
}
