//! Fixed-tick round loop
//!
//! One call to `play_round` runs a round from the first tick until the car
//! is hit or the player quits. Each tick:
//!
//! 1. poll input (move, or quit straight back to the menu)
//! 2. draw the car and active obstacles
//! 3. test for a collision and stop on a hit
//! 4. sleep for the current difficulty's tick
//! 5. erase the frame
//! 6. to 8. wake, advance and recycle obstacles (`sim::tick`), refreshing
//!    the sidebar whenever a point is scored

use crate::error::Result;
use crate::platform::{InputSource, Key, Sleeper, Surface};
use crate::renderer;
use crate::sim::{GameState, RoundSummary, Steer, TickInput, apply_input, tick};

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The car was hit
    Crashed(RoundSummary),
    /// The player pressed quit; nothing is recorded
    Abandoned,
}

/// Map a polled key to tick input. `None` means quit.
fn tick_input(key: Option<Key>) -> Option<TickInput> {
    let steer = match key {
        Some(Key::Quit) => return None,
        Some(Key::Left) => Some(Steer::Left),
        Some(Key::Right) => Some(Steer::Right),
        _ => None,
    };
    Some(TickInput { steer })
}

/// Run ticks until a collision or quit
pub fn play_round<S, I, C>(
    state: &mut GameState,
    surface: &mut S,
    input: &mut I,
    sleeper: &mut C,
) -> Result<RoundOutcome>
where
    S: Surface + ?Sized,
    I: InputSource + ?Sized,
    C: Sleeper + ?Sized,
{
    log::info!("Round started (seed {})", state.seed);

    loop {
        let Some(tick_input) = tick_input(input.poll_key()?) else {
            log::info!("Round abandoned at score {}", state.player.score);
            return Ok(RoundOutcome::Abandoned);
        };
        apply_input(state, &tick_input);

        renderer::draw_frame(surface, state)?;
        surface.flush()?;

        if state.collides() {
            let summary = state.summary();
            log::info!(
                "Crashed after {} ticks: score {}, level {}",
                state.time_ticks,
                summary.score,
                summary.level
            );
            return Ok(RoundOutcome::Crashed(summary));
        }

        sleeper.sleep(state.difficulty().tick);

        renderer::erase_frame(surface, state)?;

        let report = tick(state);
        if report.passes > 0 {
            renderer::draw_stats(surface, &state.player)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{HeadlessSurface, RecordingSleeper, ScriptedInput};
    use std::time::Duration;

    /// Put obstacle 0 right on top of the car
    fn rig_collision(state: &mut GameState) {
        let field = state.field;
        let x = state.player.x;
        if let Some(o) = state.obstacles.get_mut(0) {
            o.x = x;
            o.y = field.player_row - field.sprite_height;
        }
    }

    #[test]
    fn test_quit_key_abandons_immediately() {
        let mut state = GameState::new(1, 0);
        let mut surface = HeadlessSurface::new();
        let mut input = ScriptedInput::new([Key::Quit]);
        let mut sleeper = RecordingSleeper::default();

        let outcome = play_round(&mut state, &mut surface, &mut input, &mut sleeper).unwrap();
        assert_eq!(outcome, RoundOutcome::Abandoned);
        assert!(sleeper.slept.is_empty());
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_crash_on_first_tick() {
        let mut state = GameState::new(1, 0);
        rig_collision(&mut state);
        let mut surface = HeadlessSurface::new();
        let mut input = ScriptedInput::default();
        let mut sleeper = RecordingSleeper::default();

        let outcome = play_round(&mut state, &mut surface, &mut input, &mut sleeper).unwrap();
        assert_eq!(
            outcome,
            RoundOutcome::Crashed(RoundSummary {
                score: 0,
                high_score: 0,
                level: 1
            })
        );
        assert!(sleeper.slept.is_empty());
    }

    #[test]
    fn test_moves_and_sleeps_per_tick() {
        let mut state = GameState::new(8, 0);
        let start = state.player.x;
        let mut surface = HeadlessSurface::new();
        let mut input = ScriptedInput::new([Key::Left, Key::Other, Key::Right, Key::Right, Key::Quit]);
        let mut sleeper = RecordingSleeper::default();

        let outcome = play_round(&mut state, &mut surface, &mut input, &mut sleeper).unwrap();
        assert_eq!(outcome, RoundOutcome::Abandoned);
        assert_eq!(state.player.x, start + crate::consts::MOVE_STEP);
        assert_eq!(sleeper.slept, vec![Duration::from_millis(70); 4]);
        assert_eq!(state.time_ticks, 4);
    }

    #[test]
    fn test_quit_mapping() {
        assert_eq!(tick_input(Some(Key::Quit)), None);
        assert_eq!(tick_input(None), Some(TickInput::default()));
        assert_eq!(
            tick_input(Some(Key::Right)),
            Some(TickInput {
                steer: Some(Steer::Right)
            })
        );
    }
}
