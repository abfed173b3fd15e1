//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by obstacle slot)
//! - No rendering, terminal or file dependencies

pub mod collision;
pub mod difficulty;
pub mod obstacles;
pub mod state;
pub mod tick;

pub use collision::{collides, obstacle_hits};
pub use difficulty::{DIFFICULTY_TABLE, DifficultyLevel, current_difficulty};
pub use obstacles::{ACTIVATION_RULES, Activation, Obstacle, ObstacleSet};
pub use state::{GameState, Player, Playfield, RoundSummary, Steer};
pub use tick::{TickInput, TickReport, apply_input, tick};
