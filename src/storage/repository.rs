use tracing::debug;

use crate::entity::Note;
use crate::error::{NotepadError, Result};

use super::LocalStore;

pub const DEFAULT_STORAGE_KEY: &str = "notes";

/// Where the note list lives between sessions.
pub trait NoteRepository {
    /// Read the whole list. A missing value is an empty list.
    fn load(&self) -> Result<Vec<Note>>;

    /// Replace the stored list with `notes`.
    fn save(&mut self, notes: &[Note]) -> Result<()>;
}

fn parse_notes(key: &str, raw: Option<&str>) -> Result<Vec<Note>> {
    match raw {
        None => Ok(Vec::new()),
        Some(raw) => serde_json::from_str(raw).map_err(|source| NotepadError::CorruptNotes {
            key: key.to_string(),
            source,
        }),
    }
}

/// Note list serialized as a JSON array under one key of a [`LocalStore`].
pub struct LocalRepository {
    store: LocalStore,
    key: String,
}

impl LocalRepository {
    pub fn new(store: LocalStore, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }
}

impl NoteRepository for LocalRepository {
    fn load(&self) -> Result<Vec<Note>> {
        let notes = parse_notes(&self.key, self.store.get_item(&self.key))?;
        debug!(key = %self.key, count = notes.len(), "loaded notes");
        Ok(notes)
    }

    fn save(&mut self, notes: &[Note]) -> Result<()> {
        let raw = serde_json::to_string(notes)?;
        self.store.set_item(&self.key, raw)?;
        debug!(key = %self.key, count = notes.len(), "saved notes");
        Ok(())
    }
}

/// In-process repository holding the serialized list, for tests and
/// throwaway sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryRepository {
    value: Option<String>,
    writes: usize,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already-serialized value, as if it had been stored earlier.
    pub fn with_value(raw: impl Into<String>) -> Self {
        Self {
            value: Some(raw.into()),
            writes: 0,
        }
    }

    /// The raw stored value.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// How many times `save` has been called.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl NoteRepository for MemoryRepository {
    fn load(&self) -> Result<Vec<Note>> {
        parse_notes(DEFAULT_STORAGE_KEY, self.value.as_deref())
    }

    fn save(&mut self, notes: &[Note]) -> Result<()> {
        self.value = Some(serde_json::to_string(notes)?);
        self.writes += 1;
        Ok(())
    }
}
