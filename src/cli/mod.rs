mod commands;
mod handlers;
mod terminal;

pub use commands::{Cli, Commands, LoginArgs};
pub use handlers::{handle_add, handle_delete, handle_list, handle_session, run_session, Context};
pub use terminal::TerminalWriter;
