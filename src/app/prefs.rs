use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{AppError, Result};

/// Durable string key/value store backed by a pretty-printed JSON file.
///
/// Loading never fails: a missing or unreadable file yields an empty store,
/// and each `set` persists immediately.
pub struct PreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl PreferenceStore {
    /// Open the store at an explicit path. Tests point this at a temp dir.
    pub fn open(path: PathBuf) -> Self {
        let values = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(values) => values,
                Err(e) => {
                    eprintln!("Failed to parse preferences: {}. Starting fresh.", e);
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };

        Self { path, values }
    }

    /// Open the store at the user's config location.
    pub fn open_default() -> Self {
        Self::open(Self::default_path())
    }

    /// Preference file path (cross-platform)
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("folioview");
        path.push("prefs.json");
        path
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Set a value and persist immediately. A failed write keeps the
    /// in-memory value and is reported on stderr.
    pub fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        if let Err(e) = self.save() {
            eprintln!("Failed to save preferences: {}", e);
        }
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::Prefs(format!("cannot create {}: {}", parent.display(), e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, json)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, PreferenceStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::open(dir.path().join("prefs.json"));
        (dir, store)
    }

    #[test]
    fn test_missing_file_yields_empty_store() {
        let (_dir, store) = temp_store();
        assert_eq!(store.get("anything"), None);
    }

    #[test]
    fn test_set_then_get() {
        let (_dir, mut store) = temp_store();
        store.set("gaurav-theme-v1", "light");
        assert_eq!(store.get("gaurav-theme-v1"), Some("light"));
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut store = PreferenceStore::open(path.clone());
        store.set("gaurav-theme-v1", "light");
        drop(store);

        let reopened = PreferenceStore::open(path);
        assert_eq!(reopened.get("gaurav-theme-v1"), Some("light"));
    }

    #[test]
    fn test_corrupt_file_yields_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{not json").unwrap();

        let store = PreferenceStore::open(path);
        assert_eq!(store.get("gaurav-theme-v1"), None);
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let (_dir, mut store) = temp_store();
        store.set("gaurav-theme-v1", "light");
        store.set("gaurav-theme-v1", "dark");
        assert_eq!(store.get("gaurav-theme-v1"), Some("dark"));
    }
}
