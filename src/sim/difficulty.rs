//! Score-driven difficulty scaling
//!
//! A fixed step table maps the current score to a tick duration. Higher
//! thresholds give shorter ticks, so the whole simulation speeds up.

use std::time::Duration;

/// One row of the difficulty table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyLevel {
    /// Lowest score that selects this row
    pub min_score: u32,
    /// Sleep between ticks
    pub tick: Duration,
    /// Level shown to the player (1-based)
    pub level: u8,
}

/// Ordered hardest first; thresholds strictly decrease down the table and the
/// last row starts at zero so every score has a row.
#[rustfmt::skip]
pub const DIFFICULTY_TABLE: [DifficultyLevel; 5] = [
    DifficultyLevel { min_score: 20, tick: Duration::from_millis(18), level: 5 },
    DifficultyLevel { min_score: 15, tick: Duration::from_millis(28), level: 4 },
    DifficultyLevel { min_score: 10, tick: Duration::from_millis(40), level: 3 },
    DifficultyLevel { min_score: 5, tick: Duration::from_millis(55), level: 2 },
    DifficultyLevel { min_score: 0, tick: Duration::from_millis(70), level: 1 },
];

/// Select the row with the highest threshold not above `score`
pub fn current_difficulty(score: u32) -> &'static DifficultyLevel {
    DIFFICULTY_TABLE
        .iter()
        .find(|d| score >= d.min_score)
        .unwrap_or(&DIFFICULTY_TABLE[DIFFICULTY_TABLE.len() - 1])
}
