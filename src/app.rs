//! Menu state machine
//!
//! ```text
//! Menu -> Instructions -> Menu
//! Menu -> Stats -> Menu
//! Menu -> Playing -> (game over) -> Menu
//! Menu -> Quit
//! ```

use chrono::{Local, NaiveDate};

use crate::error::Result;
use crate::game::{RoundOutcome, play_round};
use crate::persistence::{SessionLog, SessionRecord};
use crate::platform::{InputSource, Key, Sleeper, Surface};
use crate::renderer;
use crate::settings::Settings;
use crate::sim::GameState;
use crate::ui;

/// Which page the app is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Instructions,
    Stats,
    Playing,
    Quit,
}

impl Screen {
    /// Menu selection for a key; anything unrecognised redraws the menu
    pub fn from_menu_key(key: Key) -> Self {
        match key {
            Key::Char('1') => Screen::Instructions,
            Key::Char('2') => Screen::Playing,
            Key::Char('3') => Screen::Stats,
            Key::Char('4') | Key::Quit => Screen::Quit,
            _ => Screen::Menu,
        }
    }
}

pub struct App<S, I, C> {
    surface: S,
    input: I,
    sleeper: C,
    settings: Settings,
    log: SessionLog,
    /// Best score this process; survives across rounds
    session_best: u32,
}

impl<S: Surface, I: InputSource, C: Sleeper> App<S, I, C> {
    pub fn new(surface: S, input: I, sleeper: C, settings: Settings) -> Self {
        let log = SessionLog::new(settings.data_file.clone());
        Self {
            surface,
            input,
            sleeper,
            settings,
            log,
            session_best: 0,
        }
    }

    pub fn session_best(&self) -> u32 {
        self.session_best
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Run until the player quits
    pub fn run(&mut self) -> Result<()> {
        let mut screen = Screen::Menu;
        loop {
            screen = match screen {
                Screen::Menu => {
                    ui::show_menu(&mut self.surface)?;
                    Screen::from_menu_key(self.input.wait_key()?)
                }
                Screen::Instructions => {
                    ui::show_instructions(&mut self.surface)?;
                    self.input.wait_key()?;
                    Screen::Menu
                }
                Screen::Stats => {
                    self.show_stats()?;
                    self.input.wait_key()?;
                    Screen::Menu
                }
                Screen::Playing => {
                    self.play()?;
                    Screen::Menu
                }
                Screen::Quit => {
                    log::info!("Quit from menu");
                    return Ok(());
                }
            };
        }
    }

    fn show_stats(&mut self) -> Result<()> {
        let summary = match self.log.summarize() {
            Ok(summary) => Some(summary),
            Err(e) if e.is_not_found() => None,
            Err(e) => {
                log::warn!("Could not read {}: {e}", self.log.path().display());
                None
            }
        };
        ui::show_stats(&mut self.surface, summary.as_ref())?;
        Ok(())
    }

    /// Start a round with a fresh seed
    pub fn play(&mut self) -> Result<Option<SessionRecord>> {
        let seed = self.settings.seed.unwrap_or_else(rand::random);
        let state = GameState::new(seed, self.session_best);
        self.run_round(state)
    }

    /// Play `state` to the end. A crash is logged and shown; returns the
    /// record that was produced, or `None` when the round was abandoned.
    pub fn run_round(&mut self, mut state: GameState) -> Result<Option<SessionRecord>> {
        renderer::draw_scene(&mut self.surface, &state)?;
        if self.settings.start_prompt {
            ui::show_start_prompt(&mut self.surface)?;
            self.input.wait_key()?;
            ui::hide_start_prompt(&mut self.surface)?;
        }

        let outcome = play_round(
            &mut state,
            &mut self.surface,
            &mut self.input,
            &mut self.sleeper,
        )?;
        self.session_best = self.session_best.max(state.player.high_score);

        let RoundOutcome::Crashed(summary) = outcome else {
            return Ok(None);
        };

        let record = SessionRecord::new(
            today(),
            summary.score,
            summary.high_score,
            summary.level,
        );
        let saved = match self.log.append(&record) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Round not recorded: {e}");
                false
            }
        };

        let data_file = self.log.path().display().to_string();
        ui::show_game_over(&mut self.surface, &record, saved, &data_file)?;
        self.input.wait_key()?;
        Ok(Some(record))
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
