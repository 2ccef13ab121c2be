pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod ids;
pub mod manager;
pub mod render;
pub mod session;
pub mod storage;

pub use config::Config;
pub use entity::Note;
pub use error::{NotepadError, Result};
pub use manager::NoteManager;
pub use session::{Gate, Session};
