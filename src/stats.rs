//! Aggregate statistics over the session log
//!
//! Rebuilt from the log file every time the stats screen opens; nothing here
//! is persisted on its own.

use crate::persistence::SessionRecord;
use crate::persistence::record::high_score_field;

/// Everything the stats screen shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsSummary {
    /// Data lines as stored, in file order
    pub lines: Vec<String>,
    /// Lines that parsed as full records
    pub records: Vec<SessionRecord>,
    /// Highest high-score column across all lines
    pub best_ever: u32,
}

impl StatsSummary {
    /// Aggregate data lines (comments already removed).
    ///
    /// Lines whose high-score column does not parse still count as games but
    /// are skipped for the all-time best.
    pub fn from_lines(lines: Vec<String>) -> Self {
        let mut records = Vec::with_capacity(lines.len());
        let mut best_ever = 0;
        for line in &lines {
            match SessionRecord::parse(line) {
                Ok(record) => records.push(record),
                Err(e) => log::debug!("{e}"),
            }
            if let Some(high) = high_score_field(line) {
                best_ever = best_ever.max(high);
            }
        }
        Self {
            lines,
            records,
            best_ever,
        }
    }

    /// Number of rounds in the log
    pub fn total_games(&self) -> usize {
        self.lines.len()
    }

    /// Check if no rounds have been recorded
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The last `n` lines, oldest first
    pub fn recent(&self, n: usize) -> &[String] {
        let start = self.lines.len().saturating_sub(n);
        &self.lines[start..]
    }
}
