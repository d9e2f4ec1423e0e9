//! Ledger entry model
//!
//! An [`Entry`] is one income or expense transaction. Entries are immutable
//! once constructed; an edit replaces the whole entry in the store rather
//! than mutating fields in place.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::TallyError;
use crate::models::Money;

/// Unique identifier for a ledger entry
///
/// Assigned once at creation and preserved across save/load round-trips.
/// This is the sole matching key for update and delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Create a new random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Shortened form for table display
    pub fn short(&self) -> String {
        self.0.to_string()[..8].to_string()
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| TallyError::Parse(format!("invalid entry id: {}", s)))
    }
}

/// The two-valued classification of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Income,
    Expense,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for Kind {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(TallyError::Parse(format!(
                "invalid kind '{}' (expected 'income' or 'expense')",
                other
            ))),
        }
    }
}

/// One ledger transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier
    pub id: EntryId,

    /// Income or expense
    pub kind: Kind,

    /// Non-negative magnitude; the sign is implied by `kind`
    pub amount: Money,

    /// Free-form category label; may be blank
    #[serde(default)]
    pub category: String,

    /// Calendar date (no time-of-day component)
    pub date: NaiveDate,

    /// Free-form note; may be empty
    #[serde(default)]
    pub note: String,
}

impl Entry {
    /// Create a new entry with a fresh id
    pub fn new(
        kind: Kind,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
        note: impl Into<String>,
    ) -> Self {
        Self {
            id: EntryId::new(),
            kind,
            amount,
            category: category.into(),
            date,
            note: note.into(),
        }
    }

    /// Validate the entry's invariants
    pub fn validate(&self) -> Result<(), TallyError> {
        if self.amount.is_negative() {
            return Err(TallyError::Validation(format!(
                "amount must not be negative (got {})",
                self.amount
            )));
        }
        Ok(())
    }

    /// The `"YYYY-MM"` month bucket this entry falls into
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.category,
            self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_entry() {
        let e = Entry::new(
            Kind::Expense,
            Money::from_cents(10000),
            "Dining",
            date(2025, 1, 1),
            "lunch",
        );
        assert_eq!(e.kind, Kind::Expense);
        assert_eq!(e.amount.cents(), 10000);
        assert_eq!(e.category, "Dining");
        assert_eq!(e.note, "lunch");
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Entry::new(Kind::Income, Money::zero(), "", date(2025, 1, 1), "");
        let b = Entry::new(Kind::Income, Money::zero(), "", date(2025, 1, 1), "");
        assert_ne!(a.id, b.id);
        assert_ne!(a.id.as_uuid(), b.id.as_uuid());
        assert_eq!(a.id.short().len(), 8);
    }

    #[test]
    fn test_validate_rejects_negative_amount() {
        let e = Entry::new(
            Kind::Expense,
            Money::from_cents(-1),
            "Dining",
            date(2025, 1, 1),
            "",
        );
        assert!(e.validate().is_err());

        let ok = Entry::new(Kind::Expense, Money::zero(), "", date(2025, 1, 1), "");
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_month_key() {
        let e = Entry::new(
            Kind::Income,
            Money::from_cents(500000),
            "Salary",
            date(2025, 11, 30),
            "",
        );
        assert_eq!(e.month_key(), "2025-11");
    }

    #[test]
    fn test_kind_round_trip() {
        assert_eq!("income".parse::<Kind>().unwrap(), Kind::Income);
        assert_eq!("Expense".parse::<Kind>().unwrap(), Kind::Expense);
        assert!("transfer".parse::<Kind>().is_err());
    }

    #[test]
    fn test_kind_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&Kind::Income).unwrap(), "\"income\"");
        let back: Kind = serde_json::from_str("\"expense\"").unwrap();
        assert_eq!(back, Kind::Expense);
    }

    #[test]
    fn test_entry_serialization() {
        let e = Entry::new(
            Kind::Expense,
            Money::from_cents(1050),
            "Transit",
            date(2025, 1, 5),
            "subway",
        );
        let json = serde_json::to_string(&e).unwrap();
        let back: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(e, back);
        assert!(json.contains("\"2025-01-05\""));
    }

    #[test]
    fn test_entry_id_parse() {
        let id = EntryId::new();
        let parsed: EntryId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
        assert!("not-a-uuid".parse::<EntryId>().is_err());
    }

    #[test]
    fn test_display() {
        let mut e = Entry::new(
            Kind::Expense,
            Money::from_cents(10000),
            "Dining",
            date(2025, 1, 1),
            "",
        );
        e.note = "lunch".into();
        assert_eq!(e.to_string(), "2025-01-01 [Expense] Dining: 100.00");
    }
}
