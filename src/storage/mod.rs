pub mod json_backend;

use crate::errors::JournalError;

pub type Result<T> = std::result::Result<T, JournalError>;

/// Fixed record name for the serialized entry sequence.
pub const ENTRIES_KEY: &str = "financeData";
/// Fixed record name for the journal-wide note scalar.
pub const NOTE_KEY: &str = "financeDiary";
/// Fixed record name for the string-encoded id counter.
pub const NEXT_ID_KEY: &str = "financeNextId";

/// Abstraction over durable key-value media capable of holding the three
/// journal records.
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, or `None` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

pub use json_backend::{FileStore, MemoryStore};
