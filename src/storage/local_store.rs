use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{NotepadError, Result};

pub const NOTEPAD_DIR: &str = ".notepad";
pub const STORE_FILE: &str = "storage.json";

/// String-keyed, string-valued store persisted as one JSON object.
///
/// Mirrors the shape of browser local storage: every value is an opaque
/// string, and callers decide how to encode what they put in it. The file
/// is created on the first write, so opening a project that has never
/// stored anything succeeds with an empty store.
pub struct LocalStore {
    items: BTreeMap<String, String>,
    path: PathBuf,
}

impl LocalStore {
    /// Open the store under `root/.notepad/`.
    pub fn open(root: &Path) -> Result<Self> {
        let path = root.join(NOTEPAD_DIR).join(STORE_FILE);

        let items = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw).map_err(|source| NotepadError::CorruptStore {
                path: path.display().to_string(),
                source,
            })?
        } else {
            BTreeMap::new()
        };

        debug!(path = %path.display(), keys = items.len(), "opened local store");
        Ok(Self { items, path })
    }

    /// Get the raw value stored under `key`, if any.
    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    /// Store `value` under `key` and write the whole store back to disk.
    pub fn set_item(&mut self, key: &str, value: String) -> Result<()> {
        let previous = self.items.insert(key.to_string(), value);
        if let Err(e) = self.flush() {
            // Keep memory in step with disk when the write fails.
            match previous {
                Some(old) => self.items.insert(key.to_string(), old),
                None => self.items.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let raw = serde_json::to_string_pretty(&self.items)?;
        fs::write(&self.path, raw)?;
        debug!(path = %self.path.display(), keys = self.items.len(), "flushed local store");
        Ok(())
    }
}
