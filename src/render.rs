//! Screens as plain data.
//!
//! Rendering is a projection of current state into a [`Frame`]. Entrance and
//! exit effects are attached afterwards by a [`Decorator`] and only tell the
//! terminal writer how to show a frame; nothing here touches notes or
//! storage.

use crate::entity::Note;
use crate::manager::NoteManager;
use crate::session::Gate;
use crate::storage::NoteRepository;

pub const APP_TITLE: &str = "📝 Note Taking App";
pub const LOGIN_TITLE: &str = "Login";
pub const DRAFT_PLACEHOLDER: &str = "Write a note...";
pub const FOOTER: &str = "Notes are kept on this device only.";

/// Presentation effect attached to a frame or line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Whole screen appears.
    Enter,
    /// A list item appears after `delay_ms`.
    StaggeredEnter { delay_ms: u64 },
    /// Fades in after the rest of the screen.
    FadeIn,
    /// A removed item slides away.
    SlideOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    /// Set for lines that show a note.
    pub note_id: Option<i64>,
    pub effect: Option<Effect>,
}

impl Line {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            note_id: None,
            effect: None,
        }
    }

    fn note(position: usize, note: &Note) -> Self {
        Self {
            text: format!("{:>3}. {}  [{}]", position, note.text, note.id),
            note_id: Some(note.id),
            effect: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub title: String,
    pub lines: Vec<Line>,
    pub footer: Option<Line>,
    pub effect: Option<Effect>,
}

impl Frame {
    /// Ids of the notes shown, top to bottom.
    pub fn note_ids(&self) -> Vec<i64> {
        self.lines.iter().filter_map(|l| l.note_id).collect()
    }
}

pub fn login_frame(gate: &Gate) -> Frame {
    let email = if gate.identifier().is_empty() {
        "(empty)".to_string()
    } else {
        gate.identifier().to_string()
    };
    let password = if gate.secret_len() == 0 {
        "(empty)".to_string()
    } else {
        "*".repeat(gate.secret_len())
    };

    Frame {
        title: LOGIN_TITLE.to_string(),
        lines: vec![
            Line::text(format!("  Email:    {}", email)),
            Line::text(format!("  Password: {}", password)),
        ],
        footer: None,
        effect: None,
    }
}

pub fn notes_frame<R: NoteRepository>(manager: &NoteManager<R>) -> Frame {
    let mut lines = Vec::with_capacity(manager.notes().len() + 2);

    let draft = if manager.draft().is_empty() {
        DRAFT_PLACEHOLDER
    } else {
        manager.draft()
    };
    lines.push(Line::text(format!("  > {}   (add <text>)", draft)));

    if manager.notes().is_empty() {
        lines.push(Line::text("  No notes yet."));
    } else {
        for (i, note) in manager.notes().iter().enumerate() {
            lines.push(Line::note(i + 1, note));
        }
        lines.push(Line::text("  (delete <id> to remove a note)"));
    }

    Frame {
        title: APP_TITLE.to_string(),
        lines,
        footer: Some(Line::text(FOOTER)),
        effect: None,
    }
}

/// Attaches presentation effects to rendered output.
pub trait Decorator {
    fn decorate(&self, frame: Frame) -> Frame;

    /// Line to show for a note that was just removed, if any.
    fn removed(&self, _note: &Note) -> Option<Line> {
        None
    }
}

/// No effects.
pub struct Plain;

impl Decorator for Plain {
    fn decorate(&self, frame: Frame) -> Frame {
        frame
    }
}

/// Entrance on mount, staggered note entrance, fading footer and
/// slide-out on removal.
pub struct Animated {
    pub stagger_ms: u64,
}

impl Decorator for Animated {
    fn decorate(&self, mut frame: Frame) -> Frame {
        frame.effect = Some(Effect::Enter);

        let mut delay_ms: u64 = 0;
        for line in frame.lines.iter_mut().filter(|l| l.note_id.is_some()) {
            line.effect = Some(Effect::StaggeredEnter { delay_ms });
            delay_ms = delay_ms.saturating_add(self.stagger_ms);
        }

        if let Some(footer) = frame.footer.as_mut() {
            footer.effect = Some(Effect::FadeIn);
        }
        frame
    }

    fn removed(&self, note: &Note) -> Option<Line> {
        Some(Line {
            text: format!("  - {}", note.text),
            note_id: Some(note.id),
            effect: Some(Effect::SlideOut),
        })
    }
}
