//! Lane Dodger - A terminal lane-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (obstacles, collisions, difficulty)
//! - `game`: Fixed-tick round loop over injected collaborators
//! - `app`: Menu state machine
//! - `renderer`: Glyph drawing for the playfield and sidebar
//! - `platform`: Terminal/headless surface, input and sleep abstraction
//! - `persistence`: Append-only fixed-width session log
//! - `stats`: Aggregates read back from the session log

pub mod app;
pub mod error;
pub mod game;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod stats;
pub mod ui;

pub use app::App;
pub use error::{Error, Result};
pub use settings::Settings;
pub use stats::StatsSummary;

/// Game configuration constants
pub mod consts {
    /// Full screen extent, sidebar included
    pub const SCREEN_WIDTH: i32 = 90;
    pub const SCREEN_HEIGHT: i32 = 26;
    /// Right edge of the road (sidebar starts past this column)
    pub const WIN_WIDTH: i32 = 70;
    /// Width of the `+` border on each side of the road
    pub const BORDER_COLS: i32 = 17;

    /// Number of obstacle slots per round
    pub const OBSTACLE_COUNT: usize = 3;
    /// Sprites (player and obstacles) are square
    pub const SPRITE_SIZE: i32 = 4;

    /// Row where the player's car sits
    pub const PLAYER_ROW: i32 = 22;
    /// Player start column
    pub const PLAYER_START_X: i32 = WIN_WIDTH / 2 - 1;
    /// Columns moved per key press
    pub const MOVE_STEP: i32 = 4;

    /// Lane bounds for the player
    pub const LANE_MIN_X: i32 = BORDER_COLS + 1;
    pub const LANE_MAX_X: i32 = WIN_WIDTH - BORDER_COLS - SPRITE_SIZE - 1;

    /// Obstacles spawn in `LANE_MIN_X .. LANE_MIN_X + SPAWN_SPAN`
    pub const SPAWN_SPAN: i32 = 33;
    /// Draws per spawn before a conflicting position is accepted anyway
    pub const SPAWN_ATTEMPTS: u32 = 20;

    /// Row obstacles (re)enter at
    pub const TOP_ROW: i32 = 1;
    /// Obstacles whose row exceeds this have left the playfield
    pub const EXIT_ROW: i32 = SCREEN_HEIGHT - SPRITE_SIZE;
    /// Obstacle 1 wakes when obstacle 0 reaches this row
    pub const MIDWAY_ROW: i32 = 10;
    /// Obstacle 2 wakes at this score
    pub const SECOND_WAVE_SCORE: u32 = 5;

    /// Horizontal overlap window for a hit. Wider than the sprite on purpose.
    pub const COLLISION_WIDTH: i32 = 9;
}
