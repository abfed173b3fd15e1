//! Road border and sidebar

use std::io;

use crate::consts::{BORDER_COLS, SCREEN_HEIGHT, SCREEN_WIDTH, WIN_WIDTH};
use crate::platform::Surface;
use crate::sim::{Player, current_difficulty};

/// Sidebar column anchors
const SIDEBAR_TITLE_COL: i32 = WIN_WIDTH + 7;
const SIDEBAR_RULE_COL: i32 = WIN_WIDTH + 6;
const SIDEBAR_KEYS_COL: i32 = WIN_WIDTH + 2;

/// `+` walls either side of the road and down the right screen edge
pub fn draw_border<S: Surface + ?Sized>(surface: &mut S) -> io::Result<()> {
    let wall = "+".repeat(BORDER_COLS as usize);
    for row in 0..SCREEN_HEIGHT {
        surface.place_glyphs(0, row, &wall)?;
        surface.place_glyphs(WIN_WIDTH - BORDER_COLS + 1, row, &wall)?;
        surface.place_glyphs(SCREEN_WIDTH, row, "+")?;
    }
    Ok(())
}

/// Static sidebar text: title and control legend
pub fn draw_sidebar<S: Surface + ?Sized>(surface: &mut S) -> io::Result<()> {
    surface.place_glyphs(SIDEBAR_TITLE_COL, 2, "CAR GAME")?;
    surface.place_glyphs(SIDEBAR_RULE_COL, 4, "----------")?;
    surface.place_glyphs(SIDEBAR_TITLE_COL, 12, "Controls")?;
    surface.place_glyphs(SIDEBAR_TITLE_COL, 13, "---------")?;
    surface.place_glyphs(SIDEBAR_KEYS_COL, 14, " A key  - Left")?;
    surface.place_glyphs(SIDEBAR_KEYS_COL, 15, " D key  - Right")?;
    surface.place_glyphs(SIDEBAR_KEYS_COL, 16, " ESC    - Quit")?;
    Ok(())
}

/// Score, session best and speed level
pub fn draw_stats<S: Surface + ?Sized>(surface: &mut S, player: &Player) -> io::Result<()> {
    let level = current_difficulty(player.score).level;
    // Trailing blanks wipe longer previous values
    surface.place_glyphs(SIDEBAR_TITLE_COL, 5, &format!("Score    : {}   ", player.score))?;
    surface.place_glyphs(SIDEBAR_TITLE_COL, 6, &format!("Best     : {}   ", player.high_score))?;
    surface.place_glyphs(SIDEBAR_TITLE_COL, 7, &format!("Speed Lv : {}   ", level))?;
    Ok(())
}
