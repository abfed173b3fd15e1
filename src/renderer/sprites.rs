//! Sprite glyphs and draw/erase helpers

use std::io;

use crate::consts::SPRITE_SIZE;
use crate::platform::Surface;
use crate::sim::{GameState, Obstacle};

/// The player's car, one string per row
pub const CAR: [&str; SPRITE_SIZE as usize] = [" ++ ", "++++", " ++ ", "++++"];
/// A falling obstacle
pub const OBSTACLE: [&str; SPRITE_SIZE as usize] = ["****", " ** ", "****", " ** "];

/// Exactly sprite width; a fifth blank would wipe the right border column
const BLANK: &str = "    ";

fn draw_sprite<S: Surface + ?Sized>(
    surface: &mut S,
    col: i32,
    row: i32,
    rows: &[&str],
) -> io::Result<()> {
    for (dy, line) in rows.iter().enumerate() {
        surface.place_glyphs(col, row + dy as i32, line)?;
    }
    Ok(())
}

fn erase_sprite<S: Surface + ?Sized>(surface: &mut S, col: i32, row: i32) -> io::Result<()> {
    draw_sprite(surface, col, row, &[BLANK; SPRITE_SIZE as usize])
}

pub fn draw_car<S: Surface + ?Sized>(surface: &mut S, state: &GameState) -> io::Result<()> {
    draw_sprite(surface, state.player.x, state.field.player_row, &CAR)
}

pub fn erase_car<S: Surface + ?Sized>(surface: &mut S, state: &GameState) -> io::Result<()> {
    erase_sprite(surface, state.player.x, state.field.player_row)
}

/// Inactive obstacles are not drawn
pub fn draw_obstacle<S: Surface + ?Sized>(surface: &mut S, obstacle: &Obstacle) -> io::Result<()> {
    if !obstacle.active {
        return Ok(());
    }
    draw_sprite(surface, obstacle.x, obstacle.y, &OBSTACLE)
}

pub fn erase_obstacle<S: Surface + ?Sized>(surface: &mut S, obstacle: &Obstacle) -> io::Result<()> {
    if !obstacle.active {
        return Ok(());
    }
    erase_sprite(surface, obstacle.x, obstacle.y)
}
