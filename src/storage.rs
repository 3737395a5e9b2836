use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::compose::{TemplateOverrides, TemplateSet};
use crate::error::{Error, Result};
use crate::types::ContactInfo;

/// Storage key for the quick-fill contact record
pub const CONTACT_KEY: &str = "user_info";
/// Storage key for comment template overrides
pub const TEMPLATES_KEY: &str = "comment_templates";

/// Minimal durable key-value capability: get/set/remove by string key. The
/// persistence logic is written against this trait so tests can run on the
/// in-memory backend.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// File-backed storage: one JSON document per key under a directory
/// (by default `$HOME/.billtracker`).
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Io(e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            // Removing an absent key is a no-op, so clear stays idempotent
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Io(e)),
        }
    }
}

/// In-memory storage for tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Quick-fill persistence over any storage backend. Loads never fail: a
/// missing or corrupt stored value degrades to defaults (logged, not
/// surfaced). Saves are full-record overwrites and report their outcome.
pub struct ProfileStore<S: Storage> {
    storage: S,
}

impl<S: Storage> ProfileStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Load the saved contact record, or defaults when none exists. Corrupt
    /// storage is treated identically to "no data".
    pub fn load_contact(&self) -> ContactInfo {
        let raw = match self.storage.get(CONTACT_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return ContactInfo::default(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read stored contact info");
                return ContactInfo::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(info) => info,
            Err(e) => {
                tracing::warn!(error = %e, "stored contact info is corrupt, using defaults");
                ContactInfo::default()
            }
        }
    }

    /// Full overwrite of the stored contact record.
    pub fn save_contact(&mut self, info: &ContactInfo) -> Result<()> {
        let json = serde_json::to_string(info)?;
        self.storage
            .set(CONTACT_KEY, &json)
            .map_err(|e| Error::Storage(format!("failed to save contact info: {}", e)))
    }

    /// Remove the stored contact record entirely. Idempotent.
    pub fn clear_contact(&mut self) -> Result<()> {
        self.storage.remove(CONTACT_KEY)
    }

    /// Load the stored template overrides (without defaults applied).
    pub fn load_overrides(&self) -> TemplateOverrides {
        let raw = match self.storage.get(TEMPLATES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return TemplateOverrides::default(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read stored templates");
                return TemplateOverrides::default();
            }
        };
        match serde_json::from_str(&raw) {
            Err(e) => {
                tracing::warn!(error = %e, "stored templates are corrupt, using defaults");
                TemplateOverrides::default()
            }
            Ok(overrides) => overrides,
        }
    }

    /// Templates with stored overrides merged over the built-in defaults.
    pub fn load_templates(&self) -> TemplateSet {
        TemplateSet::with_overrides(&self.load_overrides())
    }

    /// Merge new overrides into the stored set and write the whole record
    /// back. Merging happens in memory; the storage write is a full replace.
    pub fn save_templates(&mut self, updates: &TemplateOverrides) -> Result<()> {
        let mut merged = self.load_overrides();
        if let Some(support) = &updates.support {
            merged.support = Some(support.clone());
        }
        if let Some(oppose) = &updates.oppose {
            merged.oppose = Some(oppose.clone());
        }
        if let Some(neutral) = &updates.neutral {
            merged.neutral = Some(neutral.clone());
        }
        let json = serde_json::to_string(&merged)?;
        self.storage
            .set(TEMPLATES_KEY, &json)
            .map_err(|e| Error::Storage(format!("failed to save templates: {}", e)))
    }
}
