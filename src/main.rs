use clap::Parser;
use notepad::cli::{handle_add, handle_delete, handle_list, handle_session, Cli, Commands, Context};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_env("NOTEPAD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();

    let result = Context::resolve(cli.dir, cli.no_animations).and_then(|ctx| {
        match cli.command.unwrap_or(Commands::Session) {
            Commands::Session => handle_session(&ctx),
            Commands::Add { text, login, json } => handle_add(&ctx, text, login, json),
            Commands::List { login, json } => handle_list(&ctx, login, json),
            Commands::Delete { id, login, json } => handle_delete(&ctx, id, login, json),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
