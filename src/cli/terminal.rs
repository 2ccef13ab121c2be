use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::render::{Effect, Frame, Line};

const DIM: &str = "\x1b[2m";
const STRIKE: &str = "\x1b[9m";
const RESET: &str = "\x1b[0m";

/// Writes frames as text. Effects are only played when `play_effects` is
/// set, and only after the state they show has already been saved.
pub struct TerminalWriter<W: Write> {
    out: W,
    play_effects: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(out: W, play_effects: bool) -> Self {
        Self { out, play_effects }
    }

    pub fn write_frame(&mut self, frame: &Frame) -> io::Result<()> {
        if self.play_effects && frame.effect == Some(Effect::Enter) {
            writeln!(self.out)?;
        }
        writeln!(self.out, "{}", frame.title)?;
        writeln!(self.out)?;

        let mut waited = 0;
        for line in &frame.lines {
            if let Some(Effect::StaggeredEnter { delay_ms }) = line.effect {
                self.pause(delay_ms.saturating_sub(waited))?;
                waited = waited.max(delay_ms);
            }
            self.write_line(line)?;
        }

        if let Some(footer) = &frame.footer {
            writeln!(self.out)?;
            self.write_line(footer)?;
        }
        self.out.flush()
    }

    pub fn write_line(&mut self, line: &Line) -> io::Result<()> {
        match (self.play_effects, line.effect) {
            (true, Some(Effect::FadeIn)) => writeln!(self.out, "{}{}{}", DIM, line.text, RESET),
            (true, Some(Effect::SlideOut)) => {
                writeln!(self.out, "{}{}{}", STRIKE, line.text, RESET)
            }
            _ => writeln!(self.out, "{}", line.text),
        }
    }

    /// Print a prompt without a newline.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()
    }

    pub fn message(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    fn pause(&mut self, ms: u64) -> io::Result<()> {
        if self.play_effects && ms > 0 {
            self.out.flush()?;
            thread::sleep(Duration::from_millis(ms));
        }
        Ok(())
    }
}
