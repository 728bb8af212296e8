//! # Key-Value Storage
//!
//! The storage seam standing in for browser `localStorage`: string keys to
//! string values, synchronous, immediately consistent with the next read.
//!
//! ## Implementations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     KeyValueStorage                                     │
//! │                                                                         │
//! │  ┌────────────────────────┐     ┌────────────────────────────────────┐ │
//! │  │  MemoryStorage         │     │  FileStorage                       │ │
//! │  │  in-memory map, no I/O │     │  One JSON object file under the    │ │
//! │  │  (tests)               │     │  platform data dir (production)    │ │
//! │  └────────────────────────┘     └────────────────────────────────────┘ │
//! │                                                                         │
//! │  Every set/remove on FileStorage rewrites the whole file via           │
//! │  temp-file-then-rename, so a persisted key is always a single          │
//! │  atomic replace - no partial-write states exist.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use directories::ProjectDirs;
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};

/// Environment override for the storage file location (development and
/// tests), following the same pattern as the platform data dir fallback.
pub const STORE_PATH_ENV: &str = "SERENDIB_STORE_PATH";

/// Synchronous string-keyed storage.
///
/// Mirrors the `localStorage` contract the original storefront was written
/// against: `get` of a missing key is `Ok(None)`, writes replace the whole
/// value, and reads immediately observe the latest write.
pub trait KeyValueStorage {
    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes `key` if present.
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

/// Shared-handle storage: the cart store and theme store hold disjoint keys
/// in the same backing file, so a single process shares one storage instance
/// between them through `Rc<RefCell<_>>` (single-threaded by design).
impl<S: KeyValueStorage> KeyValueStorage for Rc<RefCell<S>> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.borrow_mut().set(key, value)
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.borrow_mut().remove(key)
    }
}

// =============================================================================
// MemoryStorage
// =============================================================================

/// In-memory storage for tests and ephemeral sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    values: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.values.remove(key);
        Ok(())
    }
}

// =============================================================================
// FileStorage
// =============================================================================

/// File-backed storage: a single JSON object (`{"key": "value", ...}`) kept
/// fully in memory and rewritten on every mutation.
///
/// ## Why one file?
/// The whole store is a cart of a few lines plus a theme string. Loading it
/// eagerly keeps every read synchronous and consistent, and a whole-file
/// rename gives us the atomic-replace guarantee the error model assumes.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStorage {
    /// Opens (or initializes) storage at an explicit path.
    ///
    /// A missing file is an empty store. An unreadable or malformed file is
    /// recovered as empty with a warning - losing a stale cart beats
    /// refusing to start.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<BTreeMap<String, String>>(&contents) {
                Ok(values) => values,
                Err(err) => {
                    warn!(path = %path.display(), %err, "malformed storage file, starting empty");
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };

        debug!(path = %path.display(), keys = values.len(), "storage opened");
        Ok(FileStorage { path, values })
    }

    /// Opens storage at the default location.
    ///
    /// ## Resolution Order
    /// 1. `SERENDIB_STORE_PATH` environment variable
    /// 2. Platform app-data directory via `ProjectDirs`
    ///    - Linux: `~/.local/share/serendib-shop/storage.json`
    ///    - macOS: `~/Library/Application Support/lk.serendib.shop/storage.json`
    ///    - Windows: `%APPDATA%\serendib\shop\data\storage.json`
    pub fn open_default() -> StoreResult<Self> {
        let path = Self::default_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Self::open(path)
    }

    /// Resolves the default storage file path without touching the disk.
    pub fn default_path() -> StoreResult<PathBuf> {
        if let Ok(path) = std::env::var(STORE_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let dirs = ProjectDirs::from("lk", "serendib", "shop").ok_or(StoreError::NoStorageDir)?;
        Ok(dirs.data_dir().join("storage.json"))
    }

    /// The file this storage persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrites the whole storage file atomically.
    fn persist(&self) -> StoreResult<()> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| StoreError::InvalidPath(self.path.clone()))?;
        fs::create_dir_all(parent)?;

        let contents = serde_json::to_string_pretty(&self.values)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        if self.values.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("theme").unwrap(), None);

        storage.set("theme", "light").unwrap();
        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("light"));

        storage.remove("theme").unwrap();
        assert_eq!(storage.get("theme").unwrap(), None);
    }

    #[test]
    fn test_file_storage_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        {
            let mut storage = FileStorage::open(&path).unwrap();
            storage.set("cart_v1", r#"[{"productId":"netflix","qty":2}]"#).unwrap();
            storage.set("theme", "light").unwrap();
        }

        let storage = FileStorage::open(&path).unwrap();
        assert_eq!(
            storage.get("cart_v1").unwrap().as_deref(),
            Some(r#"[{"productId":"netflix","qty":2}]"#)
        );
        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_file_storage_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("absent.json")).unwrap();
        assert_eq!(storage.get("cart_v1").unwrap(), None);
    }

    #[test]
    fn test_file_storage_malformed_file_recovers_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "{{{not json").unwrap();

        let storage = FileStorage::open(&path).unwrap();
        assert_eq!(storage.get("theme").unwrap(), None);
    }

    #[test]
    fn test_shared_handle_sees_writes_immediately() {
        let shared = Rc::new(RefCell::new(MemoryStorage::new()));
        let mut writer = Rc::clone(&shared);
        let reader = Rc::clone(&shared);

        writer.set("theme", "light").unwrap();
        assert_eq!(reader.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_file_storage_remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let mut storage = FileStorage::open(&path).unwrap();
        storage.set("theme", "dark").unwrap();
        storage.remove("theme").unwrap();

        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(reopened.get("theme").unwrap(), None);
    }
}
