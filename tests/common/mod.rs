use std::path::{Path, PathBuf};
use std::sync::Mutex;

use kas_core::core::JournalManager;
use kas_core::currency::LocaleConfig;
use kas_core::storage::FileStore;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a fresh store root that survives until the test binary exits.
pub fn temp_root() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let root = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    root
}

/// Builds a journal manager backed by files under `root`.
pub fn manager_at(root: &Path) -> JournalManager {
    let storage = FileStore::new(Some(root.to_path_buf())).expect("create file store");
    JournalManager::load(Box::new(storage), LocaleConfig::indonesian())
        .expect("load journal from store")
}

/// Isolated manager plus the root it persists to, for reload scenarios.
pub fn setup_test_env() -> (JournalManager, PathBuf) {
    let root = temp_root();
    let manager = manager_at(&root);
    (manager, root)
}
