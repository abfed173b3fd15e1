//! Full-screen text pages: menu, instructions, stats and game over

use std::io;

use crate::persistence::SessionRecord;
use crate::persistence::record::{DATE_WIDTH, HIGH_SCORE_WIDTH, LEVEL_WIDTH, SCORE_WIDTH};
use crate::platform::Surface;
use crate::stats::StatsSummary;

/// Left margin of the text pages
const PAGE_COL: i32 = 16;
/// Log rows that fit on the stats page
pub const STATS_VISIBLE_ROWS: usize = 12;

/// Clear and print `lines` top-down starting at (`col`, `row`)
fn print_page<S: Surface + ?Sized>(
    surface: &mut S,
    col: i32,
    row: i32,
    lines: &[String],
) -> io::Result<()> {
    surface.clear()?;
    for (i, line) in lines.iter().enumerate() {
        surface.place_glyphs(col, row + i as i32, line)?;
    }
    surface.flush()
}

pub fn show_menu<S: Surface + ?Sized>(surface: &mut S) -> io::Result<()> {
    let lines = [
        " --------------------",
        " |     CAR GAME     |",
        " --------------------",
        "1. Instructions",
        "2. Start Game",
        "3. Stats",
        "4. Quit",
        "",
        "Select Option: ",
    ];
    let lines: Vec<String> = lines.iter().map(|s| s.to_string()).collect();
    print_page(surface, 10, 5, &lines)
}

pub fn show_instructions<S: Surface + ?Sized>(surface: &mut S) -> io::Result<()> {
    let lines = [
        "Instructions:",
        "--------------------",
        " Dodge enemy cars by moving left or right.",
        "",
        " Press 'A' (or Left) to move left",
        "",
        " Press 'D' (or Right) to move right",
        "",
        " Press 'ESC' to quit to menu",
        "",
        " Speed increases every 5 points - survive as long as you can!",
        "",
        "Press any key to go back to menu.",
    ];
    let lines: Vec<String> = lines.iter().map(|s| s.to_string()).collect();
    print_page(surface, 0, 0, &lines)
}

/// Prompt shown over the playfield before the first tick
pub fn show_start_prompt<S: Surface + ?Sized>(surface: &mut S) -> io::Result<()> {
    surface.place_glyphs(18, 5, "Press any key to start :)")?;
    surface.flush()
}

pub fn hide_start_prompt<S: Surface + ?Sized>(surface: &mut S) -> io::Result<()> {
    surface.place_glyphs(18, 5, &" ".repeat(25))
}

/// Game over summary. `saved` tells whether the log write succeeded.
pub fn show_game_over<S: Surface + ?Sized>(
    surface: &mut S,
    record: &SessionRecord,
    saved: bool,
    data_file: &str,
) -> io::Result<()> {
    let saved_line = if saved {
        format!("Results saved to {data_file}")
    } else {
        "Results could not be saved".to_string()
    };
    let lines = vec![
        "---------------------------------".to_string(),
        "---------- Game Over :(----------".to_string(),
        "---------------------------------".to_string(),
        String::new(),
        format!("Score        : {}", record.score),
        format!("High Score   : {}", record.high_score),
        format!("Speed Level  : {}", record.level),
        String::new(),
        saved_line,
        String::new(),
        "Press any key to go back to menu.".to_string(),
    ];
    print_page(surface, PAGE_COL, 1, &lines)
}

/// Stats page. `None` means the log could not be read.
pub fn show_stats<S: Surface + ?Sized>(
    surface: &mut S,
    summary: Option<&StatsSummary>,
) -> io::Result<()> {
    let mut lines = vec![
        "===================================".to_string(),
        "          GAME STATISTICS          ".to_string(),
        "===================================".to_string(),
        String::new(),
    ];

    match summary {
        Some(summary) if !summary.is_empty() => {
            lines.push(format!(
                "{:<dw$}{:<sw$}{:<hw$}{:<lw$}",
                "Date",
                "Score",
                "High Score",
                "Level",
                dw = DATE_WIDTH,
                sw = SCORE_WIDTH,
                hw = HIGH_SCORE_WIDTH,
                lw = LEVEL_WIDTH,
            ));
            lines.push("-".repeat(42));
            let hidden = summary.total_games().saturating_sub(STATS_VISIBLE_ROWS);
            if hidden > 0 {
                lines.push(format!("... {hidden} earlier games"));
            }
            lines.extend(summary.recent(STATS_VISIBLE_ROWS).iter().cloned());
            lines.push(String::new());
            lines.push(format!("Total games played : {}", summary.total_games()));
            lines.push(format!("All-time high score: {}", summary.best_ever));
        }
        _ => {
            lines.push("No games played yet.".to_string());
            lines.push("Play a round first!".to_string());
        }
    }

    lines.push(String::new());
    lines.push("Press any key to go back to menu.".to_string());
    print_page(surface, 2, 0, &lines)
}
