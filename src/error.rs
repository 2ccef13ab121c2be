use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotepadError {
    #[error("Not logged in. Both an email and a password are required.")]
    NotAuthenticated,

    #[error("Stored value under '{key}' is not a valid note list: {source}")]
    CorruptNotes {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage file {path} is not a valid key-value store: {source}")]
    CorruptStore {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No note id is left above the largest stored id")]
    IdsExhausted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, NotepadError>;
