use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::shared::cancel::CancelToken;
use crate::shared::constants::{SETTINGS_DIR_NAME, SETTINGS_FILE_NAME};
use crate::shared::settings::SettingsMap;
use crate::store::domain::error::StoreError;
use crate::store::domain::settings_store::SettingsStore;

/// Settings slot persisted as one JSON file.
///
/// An absent file means "nothing stored yet" and reads as an empty
/// mapping; an unreadable or unparsable file is a `Persistence` error
/// rather than a silent reset.
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    /// Store under the platform config directory
    /// (`<config-dir>/FaceWatch/settings.json`).
    pub fn in_config_dir() -> Result<Self, StoreError> {
        let dir = dirs::config_dir()
            .ok_or_else(|| StoreError::persistence("could not determine config directory"))?;
        Ok(Self::at_path(
            dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME),
        ))
    }

    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    fn get(&self, cancel: &CancelToken) -> Result<SettingsMap, StoreError> {
        if cancel.is_cancelled() {
            return Err(StoreError::Cancelled);
        }
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(SettingsMap::new()),
            Err(e) => {
                return Err(StoreError::persistence(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )))
            }
        };
        serde_json::from_str(&json).map_err(|e| {
            StoreError::persistence(format!("corrupt settings at {}: {e}", self.path.display()))
        })
    }

    fn put(&self, settings: SettingsMap, cancel: &CancelToken) -> Result<SettingsMap, StoreError> {
        if cancel.is_cancelled() {
            return Err(StoreError::Cancelled);
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                StoreError::persistence(format!("failed to create {}: {e}", parent.display()))
            })?;
        }
        let json = serde_json::to_string_pretty(&settings)
            .map_err(|e| StoreError::persistence(format!("failed to encode settings: {e}")))?;
        fs::write(&self.path, json).map_err(|e| {
            StoreError::persistence(format!("failed to write {}: {e}", self.path.display()))
        })?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileSettingsStore {
        FileSettingsStore::at_path(dir.path().join("nested").join("settings.json"))
    }

    fn map(pairs: &[(&str, serde_json::Value)]) -> SettingsMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_absent_file_reads_as_empty_mapping() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);
        assert!(store.get(&CancelToken::new()).unwrap().is_empty());
    }

    #[test]
    fn test_put_then_get_round_trips() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);
        let cancel = CancelToken::new();
        let settings = map(&[("a", json!(1))]);

        store.put(settings.clone(), &cancel).unwrap();

        assert_eq!(store.get(&cancel).unwrap(), settings);
    }

    #[test]
    fn test_put_creates_missing_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);

        store
            .put(map(&[("a", json!(1))]), &CancelToken::new())
            .unwrap();

        assert!(store.path().exists());
    }

    #[test]
    fn test_put_overwrites_wholesale() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);
        let cancel = CancelToken::new();

        store.put(map(&[("a", json!(1))]), &cancel).unwrap();
        store.put(map(&[("b", json!(2))]), &cancel).unwrap();

        let stored = store.get(&cancel).unwrap();
        assert!(stored.get("a").is_none());
        assert_eq!(stored.get("b"), Some(&json!(2)));
    }

    #[test]
    fn test_corrupt_blob_is_a_persistence_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        let store = FileSettingsStore::at_path(path);

        let result = store.get(&CancelToken::new());

        assert!(matches!(result, Err(StoreError::Persistence { .. })));
    }

    #[test]
    fn test_cancelled_put_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);
        let cancel = CancelToken::new();
        cancel.cancel();

        let result = store.put(map(&[("a", json!(1))]), &cancel);

        assert!(matches!(result, Err(StoreError::Cancelled)));
        assert!(!store.path().exists());
    }
}
