use chrono::Local;

use crate::currency::LocaleConfig;
use crate::domain::Entry;
use crate::errors::JournalError;

/// Note used when no prior state exists.
pub const DEFAULT_NOTE: &str = "Catatan Keuangan";

/// Canonical ordered sequence of entries plus the journal-wide note and the
/// id counter.
///
/// Ordering is insertion order and doubles as the chart's x-axis order.
/// Ids are assigned monotonically and never reused; removing an entry does
/// not renumber the rest or wind the counter back.
#[derive(Debug, Clone)]
pub struct Journal {
    locale: LocaleConfig,
    entries: Vec<Entry>,
    note: String,
    next_id: u64,
}

impl Journal {
    pub fn new(locale: LocaleConfig) -> Self {
        Self {
            locale,
            entries: Vec::new(),
            note: DEFAULT_NOTE.to_string(),
            next_id: 1,
        }
    }

    /// Reassembles a journal from previously persisted pieces.
    pub fn from_parts(
        locale: LocaleConfig,
        entries: Vec<Entry>,
        note: String,
        next_id: u64,
    ) -> Self {
        Self {
            locale,
            entries,
            note,
            next_id,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, position: usize) -> Option<&Entry> {
        self.entries.get(position)
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn locale(&self) -> &LocaleConfig {
        &self.locale
    }

    /// Appends a new entry captured at the current wall-clock time and
    /// returns a reference to it.
    pub fn append(&mut self, income: u64, expense: u64, note: impl Into<String>) -> &Entry {
        let entry = Entry::capture(self.next_id, income, expense, note, Local::now(), &self.locale);
        self.next_id += 1;
        self.entries.push(entry);
        self.entries.last().expect("entry just pushed")
    }

    /// Replaces the amounts and note of the entry at `position`. The id and
    /// the captured display strings stay untouched.
    pub fn update_at(
        &mut self,
        position: usize,
        income: u64,
        expense: u64,
        note: impl Into<String>,
    ) -> Result<(), JournalError> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(position)
            .ok_or(JournalError::OutOfRange { position, len })?;
        entry.income = income;
        entry.expense = expense;
        entry.note = note.into();
        Ok(())
    }

    /// Removes and returns the entry at `position`, shifting later entries
    /// down by one.
    pub fn remove_at(&mut self, position: usize) -> Result<Entry, JournalError> {
        if position >= self.entries.len() {
            return Err(JournalError::OutOfRange {
                position,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(position))
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }
}
