use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::cli::commands::LoginArgs;
use crate::cli::terminal::TerminalWriter;
use crate::config::Config;
use crate::error::Result;
use crate::manager::NoteManager;
use crate::render::{login_frame, notes_frame, Animated, Decorator, Plain};
use crate::session::Session;
use crate::storage::{LocalRepository, LocalStore, NOTEPAD_DIR};

const SESSION_HELP: &str = "Commands: add <text> | delete <id> | list | quit";

/// Find the project root by looking for .notepad/ in the current directory
/// and its ancestors.
fn find_project_root() -> PathBuf {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut current = cwd.as_path();
    loop {
        if current.join(NOTEPAD_DIR).exists() {
            return current.to_path_buf();
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return cwd,
        }
    }
}

/// Where the notes live and how to show them, resolved once per process.
pub struct Context {
    pub root: PathBuf,
    pub config: Config,
}

impl Context {
    pub fn resolve(dir: Option<PathBuf>, no_animations: bool) -> Result<Self> {
        let root = dir.unwrap_or_else(find_project_root);
        let mut config = Config::load(&root)?;
        if no_animations {
            config.animations = false;
        }
        debug!(root = %root.display(), ?config, "resolved context");
        Ok(Self { root, config })
    }

    fn open_manager(&self) -> Result<NoteManager<LocalRepository>> {
        let store = LocalStore::open(&self.root)?;
        let repo = LocalRepository::new(store, self.config.storage_key.clone());
        Ok(NoteManager::new(repo, self.config.ids.build()))
    }

    fn decorator(&self) -> Box<dyn Decorator> {
        if self.config.animations {
            Box::new(Animated {
                stagger_ms: self.config.stagger_ms,
            })
        } else {
            Box::new(Plain)
        }
    }

    fn plays_effects(&self) -> bool {
        self.config.animations && atty::is(atty::Stream::Stdout)
    }
}

/// One line of input in the note screen.
#[derive(Debug, PartialEq, Eq)]
enum Action {
    Add(String),
    Delete(i64),
    List,
    Quit,
    Invalid(String),
}

fn parse_action(line: &str) -> Action {
    let (word, rest) = match line.trim_start().split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (line.trim(), ""),
    };

    match word {
        // The draft is everything after the first separator, spaces included.
        "add" => Action::Add(rest.to_string()),
        "delete" => match rest.trim().parse() {
            Ok(id) => Action::Delete(id),
            Err(_) => Action::Invalid(format!("Invalid note id: {}", rest.trim())),
        },
        "list" => Action::List,
        "quit" | "exit" => Action::Quit,
        _ => Action::Invalid(SESSION_HELP.to_string()),
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

fn login_accepted(login: &LoginArgs) -> bool {
    let mut session = Session::new();
    if let Some(gate) = session.gate_mut() {
        gate.set_identifier(login.user.as_str());
        gate.set_secret(login.password.as_str());
    }
    session.submit()
}

pub fn handle_session(ctx: &Context) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(ctx, stdin.lock(), stdout.lock(), ctx.plays_effects())
}

/// Drive a full session: the login screen until it accepts, then the note
/// screen until `quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(
    ctx: &Context,
    mut input: R,
    output: W,
    play_effects: bool,
) -> Result<()> {
    let mut term = TerminalWriter::new(output, play_effects);
    let mut session = Session::new();

    while let Some(gate) = session.gate_mut() {
        term.write_frame(&login_frame(gate))?;

        term.prompt("Email: ")?;
        let Some(identifier) = read_line(&mut input)? else {
            return Ok(());
        };
        term.prompt("Password: ")?;
        let Some(secret) = read_line(&mut input)? else {
            return Ok(());
        };

        gate.set_identifier(identifier);
        gate.set_secret(secret);
        session.submit();
    }

    let mut manager = ctx.open_manager()?;
    manager.authenticate()?;

    let decorator = ctx.decorator();
    term.write_frame(&decorator.decorate(notes_frame(&manager)))?;

    loop {
        term.prompt("> ")?;
        let Some(line) = read_line(&mut input)? else {
            break;
        };

        match parse_action(&line) {
            Action::Add(text) => {
                manager.set_draft(text);
                if manager.add()?.is_some() {
                    term.write_frame(&notes_frame(&manager))?;
                }
            }
            Action::Delete(id) => {
                let removed = manager.delete(id)?;
                if removed.is_empty() {
                    term.message(&format!("No note with id {}.", id))?;
                    continue;
                }
                for note in &removed {
                    if let Some(line) = decorator.removed(note) {
                        term.write_line(&line)?;
                    }
                }
                term.write_frame(&notes_frame(&manager))?;
            }
            Action::List => term.write_frame(&notes_frame(&manager))?,
            Action::Quit => break,
            Action::Invalid(message) => term.message(&message)?,
        }
    }

    Ok(())
}

pub fn handle_add(ctx: &Context, text: String, login: LoginArgs, json: bool) -> Result<()> {
    if !login_accepted(&login) {
        debug!("login fields incomplete, add ignored");
        return Ok(());
    }

    let mut manager = ctx.open_manager()?;
    manager.authenticate()?;

    let Some(note) = manager.add_text(text)? else {
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        println!("Added note {} - {}", note.id, note.text);
    }

    Ok(())
}

pub fn handle_list(ctx: &Context, login: LoginArgs, json: bool) -> Result<()> {
    if !login_accepted(&login) {
        debug!("login fields incomplete, list ignored");
        return Ok(());
    }

    let mut manager = ctx.open_manager()?;
    manager.authenticate()?;

    if json {
        println!("{}", serde_json::to_string_pretty(manager.notes())?);
        return Ok(());
    }

    let frame = ctx.decorator().decorate(notes_frame(&manager));
    let stdout = io::stdout();
    TerminalWriter::new(stdout.lock(), ctx.plays_effects()).write_frame(&frame)?;
    Ok(())
}

pub fn handle_delete(ctx: &Context, id: i64, login: LoginArgs, json: bool) -> Result<()> {
    if !login_accepted(&login) {
        debug!("login fields incomplete, delete ignored");
        return Ok(());
    }

    let mut manager = ctx.open_manager()?;
    manager.authenticate()?;

    let removed = manager.delete(id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&removed)?);
    } else if removed.is_empty() {
        println!("No note with id {}.", id);
    } else {
        for note in removed {
            println!("Deleted note {} - {}", note.id, note.text);
        }
    }

    Ok(())
}
