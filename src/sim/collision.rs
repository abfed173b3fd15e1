//! Player/obstacle collision test
//!
//! An axis-aligned approximation on character cells, not an exact glyph
//! intersection. Only the obstacle's right edge relative to the car's left
//! column is compared, inside a window (`collision_width`) wider than the
//! sprite; the car's own width does not enter the formula.

use super::obstacles::{Obstacle, ObstacleSet};
use super::state::{Player, Playfield};

/// Whether a single obstacle hits a car at column `player_x`
#[inline]
pub fn obstacle_hits(obstacle: &Obstacle, player_x: i32, field: &Playfield) -> bool {
    if obstacle.y + field.sprite_height < field.player_row {
        return false;
    }
    let overlap = obstacle.x + field.sprite_width - player_x;
    (0..field.collision_width).contains(&overlap)
}

/// Check every active obstacle against the car; stops at the first hit
pub fn collides(player: &Player, obstacles: &ObstacleSet, field: &Playfield) -> bool {
    obstacles
        .active()
        .any(|o| obstacle_hits(o, player.x, field))
}
