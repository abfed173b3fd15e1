//! Fixed timestep simulation tick
//!
//! The pure half of a game-loop iteration: wake obstacles, move them, recycle
//! the ones that left the playfield and score them. Rendering, input and the
//! per-tick sleep stay in `crate::game`.

use super::state::{GameState, Steer};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub steer: Option<Steer>,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Obstacles activated this tick
    pub activated: usize,
    /// Obstacles recycled (each one scored a point)
    pub passes: u32,
    /// Difficulty level moved up
    pub level_up: bool,
}

/// Apply the input part of a tick
pub fn apply_input(state: &mut GameState, input: &TickInput) {
    if let Some(dir) = input.steer {
        state.steer(dir);
    }
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState) -> TickReport {
    state.time_ticks += 1;
    let level_before = state.difficulty().level;

    let activated = state
        .obstacles
        .apply_activation(state.player.score, &state.field);
    state.obstacles.advance();

    let mut passes = 0;
    for i in 0..crate::consts::OBSTACLE_COUNT {
        if state.obstacles.has_exited(i, &state.field) {
            state.obstacles.recycle(i, &state.field, &mut state.rng);
            state.player.record_pass();
            passes += 1;
        }
    }

    let level = state.difficulty().level;
    let level_up = level > level_before;
    if level_up {
        log::info!("Speed level {} at score {}", level, state.player.score);
    }

    TickReport {
        activated,
        passes,
        level_up,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    /// Tick until the score reaches `target`, ignoring collisions
    fn run_to_score(state: &mut GameState, target: u32) -> u32 {
        let mut ticks = 0;
        while state.player.score < target {
            tick(state);
            ticks += 1;
            assert!(ticks < 10_000, "score stalled at {}", state.player.score);
        }
        ticks
    }

    #[test]
    fn test_first_pass_after_falling_through() {
        let mut state = GameState::new(12345, 0);
        // Obstacle 0 starts on the top row and leaves once past the exit row
        let ticks = run_to_score(&mut state, 1);
        assert_eq!(ticks as i32, EXIT_ROW - TOP_ROW + 1);
        assert_eq!(state.obstacles.get(0).map(|o| o.y), Some(TOP_ROW));
    }

    #[test]
    fn test_second_obstacle_follows_first() {
        let mut state = GameState::new(5, 0);
        let midway_tick = (MIDWAY_ROW - TOP_ROW) as u32;
        for _ in 0..midway_tick {
            let report = tick(&mut state);
            assert_eq!(report.activated, 0);
        }
        assert_eq!(state.obstacles.get(0).map(|o| o.y), Some(MIDWAY_ROW));
        let report = tick(&mut state);
        assert_eq!(report.activated, 1);
        assert!(state.obstacles.get(1).is_some_and(|o| o.active));
    }

    #[test]
    fn test_difficulty_progression() {
        let mut state = GameState::new(2024, 0);
        assert_eq!(state.difficulty().level, 1);

        run_to_score(&mut state, SECOND_WAVE_SCORE);
        assert!(state.player.score >= SECOND_WAVE_SCORE);
        assert_eq!(state.difficulty().level, 2);

        // Obstacle 2 wakes on the next tick's activation step
        tick(&mut state);
        assert!(state.obstacles.get(2).is_some_and(|o| o.active));

        run_to_score(&mut state, 20);
        assert_eq!(state.difficulty().level, 5);
        assert_eq!(state.player.high_score, state.player.score);
    }

    #[test]
    fn test_each_pass_scores_one() {
        let mut state = GameState::new(77, 0);
        for _ in 0..500 {
            let before = state.player.clone();
            let report = tick(&mut state);
            assert_eq!(state.player.score, before.score + report.passes);
            assert!(state.player.high_score >= before.high_score);
        }
    }

    #[test]
    fn test_steering_input() {
        let mut state = GameState::new(1, 0);
        let start = state.player.x;
        apply_input(
            &mut state,
            &TickInput {
                steer: Some(Steer::Left),
            },
        );
        assert_eq!(state.player.x, start - MOVE_STEP);
        apply_input(&mut state, &TickInput::default());
        assert_eq!(state.player.x, start - MOVE_STEP);
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(99999, 0);
        let mut b = GameState::new(99999, 0);
        for _ in 0..300 {
            tick(&mut a);
            tick(&mut b);
        }
        assert_eq!(a.obstacles, b.obstacles);
        assert_eq!(a.player, b.player);
    }
}
