use super::{KeyValueStore, WriteBatch};
use crate::error::{Result, ShortlyError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const STORAGE_FILENAME: &str = "storage.json";

/// File-backed store. The whole key space is one JSON object in `<root>/storage.json`,
/// rewritten atomically on every change.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn storage_path(&self) -> PathBuf {
        self.root.join(STORAGE_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ShortlyError::Io)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        let path = self.storage_path();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(path).map_err(ShortlyError::Io)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(ShortlyError::Serialization)
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(entries).map_err(ShortlyError::Serialization)?;

        // Atomic Write
        let tmp_path = self.root.join(format!(".storage-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(ShortlyError::Io)?;
        fs::rename(&tmp_path, self.storage_path()).map_err(ShortlyError::Io)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }

    fn apply(&mut self, batch: WriteBatch) -> Result<()> {
        if batch.is_empty() {
            return Ok(());
        }
        let mut entries = self.load()?;
        for write in batch.into_writes() {
            match write.value {
                Some(value) => {
                    entries.insert(write.key, value);
                }
                None => {
                    entries.remove(&write.key);
                }
            }
        }
        self.save(&entries)
    }
}
