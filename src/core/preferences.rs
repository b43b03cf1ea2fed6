//! # Preference Store
//!
//! A tiny key-value store for user preferences that survive restarts.
//! Only one key is used today: the selected display language.
//!
//! The store is best-effort. Reads of a missing or corrupt file yield an
//! empty store and writes that fail are logged, never surfaced to the caller.
//! File writes use atomic rename (write `.tmp`, then `rename()`).

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

/// Key under which the selected language is stored.
pub const LANGUAGE_KEY: &str = "selectedLanguage";

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}

/// Non-persistent store, used in tests and when no home directory exists.
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Preferences stored as a flat JSON object on disk.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferenceStore {
    /// Opens the store at `path`. A missing or unreadable file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match read_values(&path) {
            Ok(values) => values,
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!("Ignoring unreadable preferences at {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };
        debug!("Opened preferences at {} ({} keys)", path.display(), values.len());
        Self { path, values }
    }

    fn flush(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        atomic_write_json(&self.path, &self.values)
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        if let Err(e) = self.flush() {
            warn!("Failed to save preferences to {}: {}", self.path.display(), e);
        }
    }
}

fn read_values(path: &Path) -> io::Result<BTreeMap<String, String>> {
    let json = fs::read_to_string(path)?;
    serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json(path: &Path, data: &BTreeMap<String, String>) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}
