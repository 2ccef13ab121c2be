mod local_store;
mod repository;

pub use local_store::{LocalStore, NOTEPAD_DIR, STORE_FILE};
pub use repository::{LocalRepository, MemoryRepository, NoteRepository, DEFAULT_STORAGE_KEY};
