//! Platform abstraction layer
//!
//! The game only talks to the outside world through three seams:
//! - `Surface`: place text at a (column, row) cell and clear the screen
//! - `InputSource`: non-blocking key poll plus a blocking "any key" wait
//! - `Sleeper`: the per-tick sleep
//!
//! `terminal` implements the first two on top of crossterm; `headless`
//! provides in-memory versions so rounds can run without a terminal.

use std::io;
use std::time::Duration;

pub mod headless;
pub mod terminal;

pub use headless::{HeadlessSurface, RecordingSleeper, ScriptedInput};
pub use terminal::{TerminalGuard, TerminalInput, TerminalSurface};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    /// Esc (or Ctrl+C)
    Quit,
    Char(char),
    Other,
}

impl Key {
    /// Map a typed character, letters case-insensitive
    pub fn from_char(c: char) -> Self {
        match c.to_ascii_lowercase() {
            'a' => Key::Left,
            'd' => Key::Right,
            _ => Key::Char(c),
        }
    }
}

/// Character-cell output, origin top-left
pub trait Surface {
    fn place_glyphs(&mut self, col: i32, row: i32, text: &str) -> io::Result<()>;
    fn clear(&mut self) -> io::Result<()>;
    /// Push buffered output to the screen
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Keyboard input
pub trait InputSource {
    /// Return a pending key without blocking
    fn poll_key(&mut self) -> io::Result<Option<Key>>;
    /// Block until a key is pressed
    fn wait_key(&mut self) -> io::Result<Key>;
}

/// Blocking pause between ticks
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

/// Sleeps the current thread
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
