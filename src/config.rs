use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ids::IdStrategy;
use crate::storage::{DEFAULT_STORAGE_KEY, NOTEPAD_DIR};

pub const CONFIG_FILE: &str = "config.yaml";

/// Longest pause allowed between staggered notes.
pub const MAX_STAGGER_MS: u64 = 1_000;

/// Settings read from `.notepad/config.yaml`. Every field is optional in
/// the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Key the note list is stored under.
    pub storage_key: String,
    /// Play entrance and exit effects when writing to a terminal.
    pub animations: bool,
    /// Delay between successive notes in the staggered entrance, at most
    /// [`MAX_STAGGER_MS`].
    pub stagger_ms: u64,
    /// How new note ids are chosen.
    pub ids: IdStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            animations: true,
            stagger_ms: 100,
            ids: IdStrategy::Timestamp,
        }
    }
}

impl Config {
    /// Load the config for a project root, falling back to defaults when
    /// there is no config file.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(NOTEPAD_DIR).join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path)?;
        let mut config: Config = serde_yaml::from_str(&raw)?;
        config.stagger_ms = config.stagger_ms.min(MAX_STAGGER_MS);
        Ok(config)
    }
}
