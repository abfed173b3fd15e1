//! Game state and core simulation types
//!
//! Everything one round needs lives in `GameState`; the seeded RNG is part of
//! it so a round replays identically from the same seed.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision;
use super::difficulty::{DifficultyLevel, current_difficulty};
use super::obstacles::ObstacleSet;
use crate::consts::*;

/// Immutable playfield geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playfield {
    /// Leftmost player column
    pub lane_min: i32,
    /// Rightmost player column
    pub lane_max: i32,
    /// Number of columns obstacles may spawn in, starting at `lane_min`
    pub spawn_span: i32,
    /// Row obstacles enter at
    pub top_row: i32,
    /// Obstacles below this row are recycled
    pub exit_row: i32,
    /// Row the player sits on
    pub player_row: i32,
    pub sprite_width: i32,
    pub sprite_height: i32,
    /// Horizontal overlap window used by the collision test
    pub collision_width: i32,
    /// Columns per move
    pub move_step: i32,
}

impl Playfield {
    pub const STANDARD: Playfield = Playfield {
        lane_min: LANE_MIN_X,
        lane_max: LANE_MAX_X,
        spawn_span: SPAWN_SPAN,
        top_row: TOP_ROW,
        exit_row: EXIT_ROW,
        player_row: PLAYER_ROW,
        sprite_width: SPRITE_SIZE,
        sprite_height: SPRITE_SIZE,
        collision_width: COLLISION_WIDTH,
        move_step: MOVE_STEP,
    };

    /// Minimum horizontal distance between two freshly spawned obstacles
    #[inline]
    pub fn spawn_separation(&self) -> i32 {
        self.sprite_width + 2
    }

    /// Bounds are ordered and sprites fit on screen
    pub fn is_valid(&self) -> bool {
        self.lane_min <= self.lane_max
            && self.spawn_span > 0
            && self.top_row < self.exit_row
            && self.sprite_width > 0
            && self.sprite_height > 0
            && self.lane_max + self.sprite_width <= WIN_WIDTH
            && self.player_row + self.sprite_height <= SCREEN_HEIGHT
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Horizontal move direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    Left,
    Right,
}

/// The player's car plus score counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Leftmost column of the car
    pub x: i32,
    pub score: u32,
    /// Best score seen in this process; never decreases
    pub high_score: u32,
}

impl Player {
    /// Fresh car at the start column, carrying over the session best
    pub fn new(high_score: u32) -> Self {
        Self {
            x: PLAYER_START_X,
            score: 0,
            high_score,
        }
    }

    /// Shift by one step. A step that would leave the lane is ignored.
    pub fn steer(&mut self, dir: Steer, field: &Playfield) {
        let target = match dir {
            Steer::Left => self.x - field.move_step,
            Steer::Right => self.x + field.move_step,
        };
        if (field.lane_min..=field.lane_max).contains(&target) {
            self.x = target;
        }
    }

    /// One obstacle made it past the car
    pub fn record_pass(&mut self) {
        self.score += 1;
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }
}

/// Final figures of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub score: u32,
    pub high_score: u32,
    pub level: u8,
}

/// Complete round state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the round was started with
    pub seed: u64,
    pub field: Playfield,
    pub player: Player,
    pub obstacles: ObstacleSet,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new round with the given seed, keeping the session best
    pub fn new(seed: u64, high_score: u32) -> Self {
        let field = Playfield::STANDARD;
        let mut rng = Pcg32::seed_from_u64(seed);
        let obstacles = ObstacleSet::new(&field, &mut rng);
        Self {
            seed,
            field,
            player: Player::new(high_score),
            obstacles,
            time_ticks: 0,
            rng,
        }
    }

    /// Apply a move key
    pub fn steer(&mut self, dir: Steer) {
        self.player.steer(dir, &self.field);
    }

    /// Difficulty row for the current score
    pub fn difficulty(&self) -> &'static DifficultyLevel {
        current_difficulty(self.player.score)
    }

    /// Whether any active obstacle hits the car this frame
    pub fn collides(&self) -> bool {
        collision::collides(&self.player, &self.obstacles, &self.field)
    }

    pub fn summary(&self) -> RoundSummary {
        RoundSummary {
            score: self.player.score,
            high_score: self.player.high_score,
            level: self.difficulty().level,
        }
    }
}
