//! The note list and its persistence.
//!
//! A [`NoteManager`] starts unauthenticated with nothing loaded. Once
//! [`NoteManager::authenticate`] succeeds it reads the list from its
//! repository exactly once, and from then on every change is written back
//! through the repository before it becomes visible in memory, so the
//! stored value always re-parses to the list the manager holds.

use tracing::{debug, info, warn};

use crate::entity::{positions_of, Note};
use crate::error::{NotepadError, Result};
use crate::ids::IdSource;
use crate::storage::NoteRepository;

pub struct NoteManager<R: NoteRepository> {
    repo: R,
    ids: Box<dyn IdSource>,
    notes: Vec<Note>,
    draft: String,
    authenticated: bool,
}

impl<R: NoteRepository> NoteManager<R> {
    pub fn new(repo: R, ids: Box<dyn IdSource>) -> Self {
        Self {
            repo,
            ids,
            notes: Vec::new(),
            draft: String::new(),
            authenticated: false,
        }
    }

    /// Enter the authenticated state, loading the stored list on the first
    /// call. A stored value that does not parse is returned as an error and
    /// the manager stays unauthenticated, leaving the stored value alone.
    pub fn authenticate(&mut self) -> Result<()> {
        if self.authenticated {
            return Ok(());
        }

        let notes = self.repo.load()?;
        for note in &notes {
            self.ids.observe(note.id);
        }
        info!(count = notes.len(), "session authenticated, notes loaded");

        self.notes = notes;
        self.authenticated = true;
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Add the current draft as a new note.
    ///
    /// A draft that is empty after trimming is ignored and `None` returned.
    /// Otherwise the note keeps the untrimmed draft text, the draft is
    /// cleared and the new note is returned.
    pub fn add(&mut self) -> Result<Option<Note>> {
        self.ensure_authenticated()?;

        if self.draft.trim().is_empty() {
            debug!("ignoring blank draft");
            return Ok(None);
        }

        let note = Note::new(self.ids.next_id()?, self.draft.clone());
        let mut next = self.notes.clone();
        next.push(note.clone());
        self.commit(next)?;
        self.draft.clear();

        info!(id = note.id, "note added");
        Ok(Some(note))
    }

    /// Set the draft to `text` and add it.
    pub fn add_text(&mut self, text: impl Into<String>) -> Result<Option<Note>> {
        self.set_draft(text);
        self.add()
    }

    /// Remove every note whose id is `id`, keeping the others in order.
    /// Returns the removed notes; an unknown id removes nothing and writes
    /// nothing.
    pub fn delete(&mut self, id: i64) -> Result<Vec<Note>> {
        self.ensure_authenticated()?;

        let matched = positions_of(&self.notes, id);
        if matched.is_empty() {
            debug!(id, "no note to delete");
            return Ok(Vec::new());
        }
        if matched.len() > 1 {
            warn!(id, count = matched.len(), "id shared by several notes, removing all");
        }

        let (removed, kept): (Vec<Note>, Vec<Note>) =
            self.notes.iter().cloned().partition(|n| n.id == id);
        self.commit(kept)?;

        info!(id, removed = removed.len(), "note deleted");
        Ok(removed)
    }

    fn ensure_authenticated(&self) -> Result<()> {
        if self.authenticated {
            Ok(())
        } else {
            Err(NotepadError::NotAuthenticated)
        }
    }

    fn commit(&mut self, next: Vec<Note>) -> Result<()> {
        self.repo.save(&next)?;
        self.notes = next;
        Ok(())
    }
}
