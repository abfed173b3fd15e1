//! Glyph rendering module
//!
//! Draws the playfield onto any `Surface`. Frames are incremental: the
//! previous frame's sprites are erased in place rather than clearing the
//! screen, so the border and sidebar are drawn once per round.

pub mod hud;
pub mod sprites;

use std::io;

use crate::platform::Surface;
use crate::sim::GameState;

pub use hud::{draw_border, draw_sidebar, draw_stats};
pub use sprites::{CAR, OBSTACLE};

/// Clear and draw everything that stays put during a round
pub fn draw_scene<S: Surface + ?Sized>(surface: &mut S, state: &GameState) -> io::Result<()> {
    surface.clear()?;
    draw_border(surface)?;
    draw_sidebar(surface)?;
    draw_stats(surface, &state.player)?;
    draw_frame(surface, state)
}

/// Car and active obstacles at their current positions
pub fn draw_frame<S: Surface + ?Sized>(surface: &mut S, state: &GameState) -> io::Result<()> {
    sprites::draw_car(surface, state)?;
    for obstacle in state.obstacles.iter() {
        sprites::draw_obstacle(surface, obstacle)?;
    }
    Ok(())
}

/// Blank out what `draw_frame` drew
pub fn erase_frame<S: Surface + ?Sized>(surface: &mut S, state: &GameState) -> io::Result<()> {
    sprites::erase_car(surface, state)?;
    for obstacle in state.obstacles.iter() {
        sprites::erase_obstacle(surface, obstacle)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::platform::HeadlessSurface;

    #[test]
    fn test_scene_layout() {
        let state = GameState::new(3, 9);
        let mut surface = HeadlessSurface::new();
        draw_scene(&mut surface, &state).unwrap();

        assert_eq!(surface.glyph_at(0, 0), '+');
        assert_eq!(surface.glyph_at((BORDER_COLS - 1) as usize, 10), '+');
        assert_eq!(surface.glyph_at(LANE_MIN_X as usize, 10), ' ');
        assert_eq!(surface.glyph_at(WIN_WIDTH as usize, 10), '+');
        assert_eq!(surface.glyph_at(SCREEN_WIDTH as usize, 25), '+');
        assert!(surface.contains("CAR GAME"));
        assert!(surface.contains("Score    : 0"));
        assert!(surface.contains("Best     : 9"));
        assert!(surface.contains("Speed Lv : 1"));
    }

    #[test]
    fn test_frame_draw_and_erase() {
        let state = GameState::new(3, 0);
        let mut surface = HeadlessSurface::new();
        draw_frame(&mut surface, &state).unwrap();

        let x = state.player.x as usize;
        let row = PLAYER_ROW as usize;
        for (dy, line) in CAR.iter().enumerate() {
            let drawn: String = (0..4).map(|dx| surface.glyph_at(x + dx, row + dy)).collect();
            assert_eq!(&drawn, line);
        }
        let first = state.obstacles.get(0).copied().unwrap();
        assert_eq!(surface.glyph_at(first.x as usize, first.y as usize), '*');

        erase_frame(&mut surface, &state).unwrap();
        assert_eq!(surface.glyph_at(x + 1, row), ' ');
        assert_eq!(surface.glyph_at(first.x as usize, first.y as usize), ' ');
    }

    #[test]
    fn test_erase_at_rightmost_spawn_keeps_border() {
        let mut state = GameState::new(3, 0);
        let rightmost = LANE_MIN_X + SPAWN_SPAN - 1;
        if let Some(o) = state.obstacles.get_mut(0) {
            o.x = rightmost;
            o.y = 8;
        }
        let mut surface = HeadlessSurface::new();
        draw_scene(&mut surface, &state).unwrap();
        draw_frame(&mut surface, &state).unwrap();
        erase_frame(&mut surface, &state).unwrap();

        let wall = (WIN_WIDTH - BORDER_COLS + 1) as usize;
        assert_eq!(wall, (rightmost + SPRITE_SIZE) as usize);
        for row in 8..12 {
            assert_eq!(surface.glyph_at(rightmost as usize, row), ' ');
            assert_eq!(surface.glyph_at(wall, row), '+');
        }
    }
}
