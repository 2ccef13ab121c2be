// src/entity/note.rs
use serde::{Deserialize, Serialize};

/// A single note as it is stored: the untrimmed text and a millisecond id.
///
/// Field order matters for the stored form, which reads
/// `{"text":"...","id":123}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub text: String,
    pub id: i64,
}

impl Note {
    pub fn new(id: i64, text: String) -> Self {
        Self { text, id }
    }
}
