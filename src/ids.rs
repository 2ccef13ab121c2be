//! Note id generation.
//!
//! Stored ids are millisecond timestamps. Two notes added within the same
//! millisecond would otherwise share an id, and delete removes every note
//! with a matching id, so generators here never hand out an id that is not
//! strictly greater than the last one they issued.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{NotepadError, Result};

/// Source of fresh note ids.
pub trait IdSource {
    /// Return an id greater than every id issued or observed so far, or
    /// `IdsExhausted` once `i64::MAX` has been reached.
    fn next_id(&mut self) -> Result<i64>;

    /// Record an id that already exists (e.g. from a loaded list) so later
    /// ids land above it.
    fn observe(&mut self, id: i64);
}

/// Which generator a session uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Millisecond timestamps, bumped past collisions.
    #[default]
    Timestamp,
    /// Plain counter.
    Monotonic,
}

impl IdStrategy {
    pub fn build(self) -> Box<dyn IdSource> {
        match self {
            IdStrategy::Timestamp => Box::new(TimestampIds::new()),
            IdStrategy::Monotonic => Box::new(SequentialIds::new()),
        }
    }
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Wall-clock millisecond ids.
pub struct TimestampIds {
    clock: fn() -> i64,
    last: Option<i64>,
}

impl TimestampIds {
    pub fn new() -> Self {
        Self::with_clock(now_millis)
    }

    pub fn with_clock(clock: fn() -> i64) -> Self {
        Self { clock, last: None }
    }
}

impl Default for TimestampIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for TimestampIds {
    fn next_id(&mut self) -> Result<i64> {
        let now = (self.clock)();
        let id = match self.last {
            Some(last) if now <= last => {
                last.checked_add(1).ok_or(NotepadError::IdsExhausted)?
            }
            _ => now,
        };
        self.last = Some(id);
        Ok(id)
    }

    fn observe(&mut self, id: i64) {
        if self.last.map_or(true, |last| id > last) {
            self.last = Some(id);
        }
    }
}

/// Counter ids: 1, 2, 3, ... starting above anything observed.
#[derive(Debug, Default)]
pub struct SequentialIds {
    last: i64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> Result<i64> {
        self.last = self.last.checked_add(1).ok_or(NotepadError::IdsExhausted)?;
        Ok(self.last)
    }

    fn observe(&mut self, id: i64) {
        self.last = self.last.max(id);
    }
}
