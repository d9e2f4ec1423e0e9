//! The ledger store
//!
//! [`LedgerStore`] owns the ordered collection of entries for the lifetime of
//! the process. It loads the ledger file once at construction and writes the
//! whole file back after every mutation; there is no batching or deferred
//! flush. Queries are linear scans, which is the right cost model for a
//! personal ledger.
//!
//! The store is single-threaded by design. Callers that share it across
//! threads must serialize access externally.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::TallyResult;
use crate::models::{Entry, EntryId, Kind, Money};

use super::file_io::{read_json_opt, write_json_atomic};

/// Current on-disk schema version
const SCHEMA_VERSION: u32 = 1;

/// On-disk shape of the ledger file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LedgerFile {
    schema_version: u32,
    entries: Vec<Entry>,
}

impl Default for LedgerFile {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            entries: Vec::new(),
        }
    }
}

/// What happened when the ledger file was read at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// File existed and parsed cleanly
    Loaded { entries: usize },
    /// No file yet; started with an empty ledger
    Missing,
    /// File was present but unreadable; started empty, data on disk is
    /// untouched until the next save
    Recovered { reason: String },
}

impl LoadStatus {
    /// True when the startup read had to discard unreadable data
    pub fn is_recovered(&self) -> bool {
        matches!(self, Self::Recovered { .. })
    }
}

/// Optional constraints for [`LedgerStore::search`], AND-combined
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    /// Inclusive lower date bound
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper date bound
    pub end_date: Option<NaiveDate>,
    /// Exact kind match
    pub kind: Option<Kind>,
    /// Exact category match after trimming; blank means no restriction
    pub category: Option<String>,
}

impl EntryFilter {
    /// Create a new empty filter (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to entries on or after `date`
    pub fn from_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Restrict to entries on or before `date`
    pub fn to_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Restrict to one kind
    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Restrict to an exact category label
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    fn matches(&self, entry: &Entry) -> bool {
        if let Some(start) = self.start_date {
            if entry.date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if entry.date > end {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if entry.kind != kind {
                return false;
            }
        }
        if let Some(category) = &self.category {
            let category = category.trim();
            if !category.is_empty() && entry.category != category {
                return false;
            }
        }
        true
    }
}

/// The record store: an ordered, persistent collection of ledger entries
pub struct LedgerStore {
    path: PathBuf,
    entries: Vec<Entry>,
    load_status: LoadStatus,
}

impl LedgerStore {
    /// Open the store backed by `path`, loading any existing ledger
    ///
    /// Construction never fails: a missing file starts an empty ledger
    /// (expected on first run), and an unreadable file also starts empty but
    /// records the failure in [`LoadStatus::Recovered`] so callers can
    /// surface it instead of silently losing data.
    pub fn open(path: PathBuf) -> Self {
        let (entries, load_status) = match read_json_opt::<LedgerFile, _>(&path) {
            Ok(Some(file)) => {
                let count = file.entries.len();
                (file.entries, LoadStatus::Loaded { entries: count })
            }
            Ok(None) => (Vec::new(), LoadStatus::Missing),
            Err(e) => (
                Vec::new(),
                LoadStatus::Recovered {
                    reason: e.to_string(),
                },
            ),
        };

        Self {
            path,
            entries,
            load_status,
        }
    }

    /// What the constructor found on disk
    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    /// Path of the backing ledger file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the ledger holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up one entry by id
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Append an entry and persist the ledger
    ///
    /// A failed save is returned to the caller; the in-memory append is kept
    /// so the application can retry the save later.
    pub fn add(&mut self, entry: Entry) -> TallyResult<()> {
        self.entries.push(entry);
        self.save()
    }

    /// Remove the entry with the given id and persist
    ///
    /// Returns `Ok(false)` without touching the file when no entry matches;
    /// deleting twice is a harmless no-op.
    pub fn delete(&mut self, id: EntryId) -> TallyResult<bool> {
        match self.entries.iter().position(|e| e.id == id) {
            Some(index) => {
                self.entries.remove(index);
                self.save()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Replace the entry with the given id in place and persist
    ///
    /// The replacement occupies the same position in iteration order as the
    /// entry it supersedes. Returns `Ok(false)` when no entry matches.
    pub fn update(&mut self, id: EntryId, replacement: Entry) -> TallyResult<bool> {
        match self.entries.iter().position(|e| e.id == id) {
            Some(index) => {
                self.entries[index] = replacement;
                self.save()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Filtered query: one linear scan, insertion order preserved
    pub fn search(&self, filter: &EntryFilter) -> Vec<Entry> {
        self.entries
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect()
    }

    /// Sum of amounts over all entries of one kind (exact cents)
    pub fn total(&self, kind: Kind) -> Money {
        self.entries
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.amount)
            .sum()
    }

    /// Amounts of one kind summed per `"YYYY-MM"` month, ascending by key
    ///
    /// Months with no matching entries are absent, not zero.
    pub fn monthly_summary(&self, kind: Kind) -> BTreeMap<String, Money> {
        let mut summary = BTreeMap::new();
        for entry in self.entries.iter().filter(|e| e.kind == kind) {
            *summary.entry(entry.month_key()).or_insert(Money::zero()) += entry.amount;
        }
        summary
    }

    /// Amounts of one kind summed per category label, ascending by label
    pub fn category_summary(&self, kind: Kind) -> BTreeMap<String, Money> {
        let mut summary = BTreeMap::new();
        for entry in self.entries.iter().filter(|e| e.kind == kind) {
            *summary
                .entry(entry.category.clone())
                .or_insert(Money::zero()) += entry.amount;
        }
        summary
    }

    /// Write the whole ledger to the backing file
    fn save(&self) -> TallyResult<()> {
        let file = LedgerFile {
            schema_version: SCHEMA_VERSION,
            entries: self.entries.clone(),
        };
        write_json_atomic(&self.path, &file)
    }
}
