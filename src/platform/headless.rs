//! In-memory collaborators for running rounds without a terminal

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use super::{InputSource, Key, Sleeper, Surface};

/// Character grid that grows to fit whatever is drawn
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    rows: Vec<Vec<char>>,
    /// Number of `clear()` calls
    pub clears: usize,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Character at a cell, blank if never written
    pub fn glyph_at(&self, col: usize, row: usize) -> char {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(' ')
    }

    /// One row as a string with trailing blanks trimmed
    pub fn row_text(&self, row: usize) -> String {
        self.rows
            .get(row)
            .map(|r| r.iter().collect::<String>().trim_end().to_string())
            .unwrap_or_default()
    }

    /// Whether any row contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        (0..self.rows.len()).any(|row| self.row_text(row).contains(needle))
    }
}

impl Surface for HeadlessSurface {
    fn place_glyphs(&mut self, col: i32, row: i32, text: &str) -> io::Result<()> {
        let (Ok(col), Ok(row)) = (usize::try_from(col), usize::try_from(row)) else {
            return Ok(());
        };
        if self.rows.len() <= row {
            self.rows.resize(row + 1, Vec::new());
        }
        let line = &mut self.rows[row];
        for (i, c) in text.chars().enumerate() {
            if line.len() <= col + i {
                line.resize(col + i + 1, ' ');
            }
            line[col + i] = c;
        }
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.rows.clear();
        self.clears += 1;
        Ok(())
    }
}

/// Replays a fixed key script.
///
/// `poll_key` yields `None` when the script is empty; `wait_key` fails with
/// `UnexpectedEof` instead of blocking forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    keys: VecDeque<Key>,
}

impl ScriptedInput {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_key(&mut self) -> io::Result<Option<Key>> {
        Ok(self.keys.pop_front())
    }

    fn wait_key(&mut self) -> io::Result<Key> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted"))
    }
}

/// Records requested sleeps instead of sleeping
#[derive(Debug, Clone, Default)]
pub struct RecordingSleeper {
    pub slept: Vec<Duration>,
}

impl Sleeper for RecordingSleeper {
    fn sleep(&mut self, duration: Duration) {
        self.slept.push(duration);
    }
}
