//! One line of the session log
//!
//! Columns are left-aligned and padded to fixed widths:
//! `date(12) score(10) high score(14) level(8)`.

use chrono::NaiveDate;

use crate::error::{Error, Result};

pub const DATE_WIDTH: usize = 12;
pub const SCORE_WIDTH: usize = 10;
pub const HIGH_SCORE_WIDTH: usize = 14;
pub const LEVEL_WIDTH: usize = 8;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Outcome of one completed round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionRecord {
    pub date: NaiveDate,
    pub score: u32,
    pub high_score: u32,
    pub level: u8,
}

impl SessionRecord {
    pub fn new(date: NaiveDate, score: u32, high_score: u32, level: u8) -> Self {
        Self {
            date,
            score,
            high_score,
            level,
        }
    }

    /// Fixed-width line without the trailing newline
    pub fn to_line(&self) -> String {
        format!(
            "{:<dw$}{:<sw$}{:<hw$}{:<lw$}",
            self.date.format(DATE_FORMAT).to_string(),
            self.score,
            self.high_score,
            self.level,
            dw = DATE_WIDTH,
            sw = SCORE_WIDTH,
            hw = HIGH_SCORE_WIDTH,
            lw = LEVEL_WIDTH,
        )
    }

    /// Parse a data line. Fields are whitespace separated, so lines written
    /// by hand with other spacing still read back.
    pub fn parse(line: &str) -> Result<Self> {
        let malformed = |reason: &str| Error::MalformedRecord {
            line: line.to_string(),
            reason: reason.to_string(),
        };

        let mut fields = line.split_whitespace();
        let (Some(date), Some(score), Some(high_score), Some(level)) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(malformed("expected 4 fields"));
        };

        let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|e| malformed(&format!("date: {e}")))?;
        let score = score
            .parse()
            .map_err(|e| malformed(&format!("score: {e}")))?;
        let high_score = high_score
            .parse()
            .map_err(|e| malformed(&format!("high score: {e}")))?;
        let level = level
            .parse()
            .map_err(|e| malformed(&format!("level: {e}")))?;

        Ok(Self::new(date, score, high_score, level))
    }
}

/// Empty lines and `#` lines carry no record
pub fn is_comment(line: &str) -> bool {
    line.is_empty() || line.starts_with('#')
}

/// The high score column alone, for aggregates that tolerate bad neighbours
pub fn high_score_field(line: &str) -> Option<u32> {
    line.split_whitespace().nth(2)?.parse().ok()
}
