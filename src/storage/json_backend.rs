use std::{
    collections::HashMap,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    sync::Mutex,
};

use crate::core::utils::{ensure_dir, store_dir};

use super::{KeyValueStore, Result};

const TMP_SUFFIX: &str = "tmp";

/// Durable key-value store keeping one file per record under a root
/// directory, written atomically by staging to a temporary file.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(store_dir);
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(sanitize_key(key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);
        let tmp = tmp_path(&path);
        write_atomic(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        tracing::debug!(key, bytes = value.len(), "persisted record");
        Ok(())
    }
}

/// Volatile store for tests and for exercising journal logic without a
/// filesystem dependency.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let records = self.records.lock().expect("memory store lock");
        Ok(records.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut records = self.records.lock().expect("memory store lock");
        records.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '_' | '-' => c,
            _ => '_',
        })
        .collect()
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{ENTRIES_KEY, NOTE_KEY};
    use tempfile::TempDir;

    fn store_with_temp_dir() -> (FileStore, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let store = FileStore::new(Some(temp.path().to_path_buf())).expect("file store");
        (store, temp)
    }

    #[test]
    fn get_returns_none_for_missing_key() {
        let (store, _guard) = store_with_temp_dir();
        assert!(store.get(ENTRIES_KEY).unwrap().is_none());
    }

    #[test]
    fn set_then_get_roundtrips() {
        let (store, _guard) = store_with_temp_dir();
        store.set(NOTE_KEY, "Catatan Keuangan").unwrap();
        assert_eq!(
            store.get(NOTE_KEY).unwrap().as_deref(),
            Some("Catatan Keuangan")
        );
    }

    #[test]
    fn set_overwrites_previous_value() {
        let (store, _guard) = store_with_temp_dir();
        store.set(NOTE_KEY, "lama").unwrap();
        store.set(NOTE_KEY, "baru").unwrap();
        assert_eq!(store.get(NOTE_KEY).unwrap().as_deref(), Some("baru"));
    }

    #[test]
    fn keys_map_to_distinct_files() {
        let (store, guard) = store_with_temp_dir();
        store.set("financeData", "[]").unwrap();
        store.set("financeNextId", "1").unwrap();
        let files: Vec<_> = std::fs::read_dir(guard.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .collect();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn memory_store_roundtrips() {
        let store = MemoryStore::new();
        store.set(ENTRIES_KEY, "[]").unwrap();
        assert_eq!(store.get(ENTRIES_KEY).unwrap().as_deref(), Some("[]"));
        assert!(store.get("unknown").unwrap().is_none());
    }
}
