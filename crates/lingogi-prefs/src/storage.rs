//! Durable key-value storage backends.
//!
//! One backend per process, one read path and one write path. Faults are
//! returned to the caller, which logs them and moves on (see `read_or_warn`
//! and `write_or_warn`).

use lingogi_core::{
    config::{StorageBackend, StorageConfig},
    shellexpand,
    traits::KeyValueStorage,
    LingogiError,
};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

/// Build the configured backend.
pub fn open_storage(config: &StorageConfig) -> Arc<dyn KeyValueStorage> {
    match config.backend {
        StorageBackend::File => {
            let path = shellexpand(&config.path);
            info!("preference storage: file at {path}");
            Arc::new(FileStorage::new(path))
        }
        StorageBackend::Memory => {
            info!("preference storage: in-memory");
            Arc::new(MemoryStorage::new())
        }
    }
}

/// Read a key, logging faults and treating them as unset.
pub(crate) fn read_or_warn(storage: &dyn KeyValueStorage, key: &str) -> Option<String> {
    match storage.get(key) {
        Ok(value) => value,
        Err(e) => {
            warn!("{} storage: failed to read '{key}': {e}", storage.name());
            None
        }
    }
}

/// Write a key, logging faults.
pub(crate) fn write_or_warn(storage: &dyn KeyValueStorage, key: &str, value: &str) {
    if let Err(e) = storage.set(key, value) {
        warn!("{} storage: failed to write '{key}': {e}", storage.name());
    }
}

/// Process-local storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-filled with `pairs`.
    pub fn with_values<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let values = pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            values: Mutex::new(values),
        }
    }
}

impl KeyValueStorage for MemoryStorage {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &str) -> Result<Option<String>, LingogiError> {
        let values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), LingogiError> {
        let mut values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), LingogiError> {
        let mut values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        values.remove(key);
        Ok(())
    }
}

/// All keys in one JSON object file.
///
/// A missing or empty file reads as no values. The file is rewritten
/// through a sibling temp file so a crash never leaves it half-written.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, LingogiError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(LingogiError::Storage(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )))
            }
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|e| {
            LingogiError::Storage(format!("corrupt preferences file {}: {e}", self.path.display()))
        })
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<(), LingogiError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| LingogiError::Storage(format!("failed to create data dir: {e}")))?;
        }
        let content = serde_json::to_string_pretty(values)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content)
            .and_then(|_| std::fs::rename(&tmp, &self.path))
            .map_err(|e| {
                LingogiError::Storage(format!("failed to write {}: {e}", self.path.display()))
            })
    }
}

impl KeyValueStorage for FileStorage {
    fn name(&self) -> &str {
        "file"
    }

    fn get(&self, key: &str) -> Result<Option<String>, LingogiError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), LingogiError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)
    }

    fn remove(&self, key: &str) -> Result<(), LingogiError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut values = self.read_all()?;
        if values.remove(key).is_some() {
            self.write_all(&values)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_set_get_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("ui_language").unwrap(), None);
        storage.set("ui_language", "ko").unwrap();
        assert_eq!(storage.get("ui_language").unwrap().as_deref(), Some("ko"));
        storage.remove("ui_language").unwrap();
        storage.remove("ui_language").unwrap();
        assert_eq!(storage.get("ui_language").unwrap(), None);
    }

    #[test]
    fn test_file_storage_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("prefs.json"));
        assert_eq!(storage.get("ui_language").unwrap(), None);
        storage.remove("ui_language").unwrap();
        assert!(!storage.path().exists(), "remove of unset key should not create the file");
    }

    #[test]
    fn test_file_storage_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");
        {
            let storage = FileStorage::new(&path);
            storage.set("ui_language", "ko").unwrap();
            storage.set("mirror_native_language", "true").unwrap();
        }
        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.get("ui_language").unwrap().as_deref(), Some("ko"));
        assert_eq!(
            reopened.get("mirror_native_language").unwrap().as_deref(),
            Some("true")
        );
        reopened.remove("ui_language").unwrap();
        assert_eq!(FileStorage::new(&path).get("ui_language").unwrap(), None);
    }

    #[test]
    fn test_file_storage_corrupt_file_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{ not json").unwrap();
        let storage = FileStorage::new(&path);
        assert!(matches!(storage.get("ui_language"), Err(LingogiError::Storage(_))));
        assert!(matches!(storage.set("ui_language", "en"), Err(LingogiError::Storage(_))));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_file_storage_empty_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "  \n").unwrap();
        assert_eq!(FileStorage::new(&path).get("ui_language").unwrap(), None);
    }

    #[test]
    fn test_read_or_warn_swallows_faults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "[]").unwrap();
        let storage = FileStorage::new(&path);
        assert_eq!(read_or_warn(&storage, "ui_language"), None);
        write_or_warn(&storage, "ui_language", "ko");
    }

    #[test]
    fn test_open_storage_memory_backend() {
        let config = StorageConfig {
            backend: StorageBackend::Memory,
            path: String::new(),
        };
        let storage = open_storage(&config);
        assert_eq!(storage.name(), "memory");
    }
}
