//! Terminal display formatting
//!
//! Formats entries and reports for terminal output. Display is a pure
//! consumer of the store's read surface; it holds no state of its own.

use std::collections::BTreeMap;

use crate::models::{Entry, Kind, Money};

/// Format a single entry for display (register row)
///
/// `date_format` is the user's strftime preference from settings.
pub fn format_entry_row(entry: &Entry, symbol: &str, date_format: &str) -> String {
    let category = if entry.category.trim().is_empty() {
        "(uncategorized)"
    } else {
        entry.category.as_str()
    };

    format!(
        "{:8} {:10} {:7} {:16} {:>12}  {}",
        entry.id.short(),
        entry.date.format(date_format),
        entry.kind.to_string(),
        truncate(category, 16),
        entry.amount.format_with_symbol(symbol),
        entry.note
    )
}

/// Format a list of entries as a register, in the order given
pub fn format_entry_table(entries: &[Entry], symbol: &str, date_format: &str) -> String {
    if entries.is_empty() {
        return "No entries found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:8} {:10} {:7} {:16} {:>12}  {}\n",
        "Id", "Date", "Kind", "Category", "Amount", "Note"
    ));
    output.push_str(&"-".repeat(64));
    output.push('\n');

    for entry in entries {
        output.push_str(&format_entry_row(entry, symbol, date_format));
        output.push('\n');
    }

    output
}

/// Format the income/expense/net totals line shown under listings
pub fn format_totals(income: Money, expense: Money, symbol: &str) -> String {
    let net = income - expense;
    format!(
        "Income: {}   Expense: {}   Net: {}\n",
        income.format_with_symbol(symbol),
        expense.format_with_symbol(symbol),
        net.format_with_symbol(symbol)
    )
}

/// Format a month- or category-keyed summary as aligned rows
pub fn format_summary(
    title: &str,
    kind: Kind,
    summary: &BTreeMap<String, Money>,
    symbol: &str,
) -> String {
    if summary.is_empty() {
        return format!("No {} entries recorded.\n", kind.to_string().to_lowercase());
    }

    let mut output = String::new();
    output.push_str(&format!("{} ({})\n", title, kind));
    output.push_str(&"-".repeat(32));
    output.push('\n');

    for (key, amount) in summary {
        let label = if key.trim().is_empty() {
            "(uncategorized)"
        } else {
            key.as_str()
        };
        output.push_str(&format!(
            "{:16} {:>12}\n",
            truncate(label, 16),
            amount.format_with_symbol(symbol)
        ));
    }

    let total: Money = summary.values().copied().sum();
    output.push_str(&"-".repeat(32));
    output.push('\n');
    output.push_str(&format!(
        "{:16} {:>12}\n",
        "Total",
        total.format_with_symbol(symbol)
    ));

    output
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
