use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "notepad")]
#[command(version, about = "Take notes in the terminal, stored on this device")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Project directory holding .notepad/ (defaults to the nearest one above the current directory)
    #[arg(long, global = true, env = "NOTEPAD_DIR", value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Turn off entrance and exit effects
    #[arg(long, global = true)]
    pub no_animations: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and manage notes interactively (the default)
    Session,

    /// Add a note
    Add {
        /// Note text, kept exactly as given
        #[arg(allow_hyphen_values = true)]
        text: String,

        #[command(flatten)]
        login: LoginArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List notes
    List {
        #[command(flatten)]
        login: LoginArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete every note with the given id
    Delete {
        /// Note id
        #[arg(allow_negative_numbers = true)]
        id: i64,

        #[command(flatten)]
        login: LoginArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Login fields for one-shot commands. Any non-empty pair is accepted.
#[derive(Args, Debug, Clone, Default)]
pub struct LoginArgs {
    /// Email (any non-empty value)
    #[arg(long, short = 'u', default_value = "")]
    pub user: String,

    /// Password (any non-empty value)
    #[arg(long, short = 'p', default_value = "")]
    pub password: String,
}
