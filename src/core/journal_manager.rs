use crate::currency::LocaleConfig;
use crate::domain::Entry;
use crate::errors::Result;
use crate::journal::{Journal, DEFAULT_NOTE};
use crate::storage::{KeyValueStore, ENTRIES_KEY, NEXT_ID_KEY, NOTE_KEY};

/// Facade that coordinates the in-memory journal with its persistence
/// mirror.
///
/// Every mutation is applied to the journal first and the affected records
/// are written back before the call returns, so storage always reflects the
/// last completed mutation.
pub struct JournalManager {
    journal: Journal,
    storage: Box<dyn KeyValueStore>,
}

impl JournalManager {
    /// Reads the persisted records and reconstructs the journal, falling
    /// back to the documented defaults (empty sequence, placeholder note,
    /// counter at 1) for records that are absent or unparseable.
    pub fn load(storage: Box<dyn KeyValueStore>, locale: LocaleConfig) -> Result<Self> {
        let entries = match storage.get(ENTRIES_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<Entry>>(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    tracing::warn!(%err, "stored entries unreadable, starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        let note = storage
            .get(NOTE_KEY)?
            .unwrap_or_else(|| DEFAULT_NOTE.to_string());
        let next_id = match storage.get(NEXT_ID_KEY)? {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(value) => value,
                Err(err) => {
                    tracing::warn!(%err, raw, "stored id counter unreadable, resetting to 1");
                    1
                }
            },
            None => 1,
        };

        tracing::info!(entries = entries.len(), next_id, "journal loaded");
        Ok(Self {
            journal: Journal::from_parts(locale, entries, note, next_id),
            storage,
        })
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn storage(&self) -> &dyn KeyValueStore {
        self.storage.as_ref()
    }

    /// Appends an entry and persists the sequence and the counter.
    pub fn append(&mut self, income: u64, expense: u64, note: impl Into<String>) -> Result<Entry> {
        let entry = self.journal.append(income, expense, note).clone();
        self.persist_entries()?;
        self.persist_next_id()?;
        Ok(entry)
    }

    /// Replaces the amounts and note at `position` and persists the sequence.
    pub fn update_at(
        &mut self,
        position: usize,
        income: u64,
        expense: u64,
        note: impl Into<String>,
    ) -> Result<()> {
        self.journal.update_at(position, income, expense, note)?;
        self.persist_entries()
    }

    /// Removes the entry at `position` and persists the sequence.
    pub fn remove_at(&mut self, position: usize) -> Result<Entry> {
        let removed = self.journal.remove_at(position)?;
        self.persist_entries()?;
        Ok(removed)
    }

    /// Updates the journal-wide note and persists it.
    pub fn set_note(&mut self, note: impl Into<String>) -> Result<()> {
        self.journal.set_note(note);
        self.persist_note()
    }

    /// Rewrites all three records, for teardown or explicit sync points.
    pub fn flush(&self) -> Result<()> {
        self.persist_entries()?;
        self.persist_note()?;
        self.persist_next_id()
    }

    fn persist_entries(&self) -> Result<()> {
        let json = serde_json::to_string(self.journal.entries())?;
        self.storage.set(ENTRIES_KEY, &json)
    }

    fn persist_note(&self) -> Result<()> {
        self.storage.set(NOTE_KEY, self.journal.note())
    }

    fn persist_next_id(&self) -> Result<()> {
        self.storage
            .set(NEXT_ID_KEY, &self.journal.next_id().to_string())
    }
}

impl std::fmt::Debug for JournalManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JournalManager")
            .field("entries", &self.journal.len())
            .field("next_id", &self.journal.next_id())
            .finish()
    }
}
