//! Falling obstacles
//!
//! A fixed arena of `OBSTACLE_COUNT` slots. Slots are never created or
//! destroyed during a round: an obstacle that leaves the bottom of the
//! playfield is recycled back to the top with a fresh column.

use rand::Rng;

use super::state::Playfield;
use crate::consts::{MIDWAY_ROW, OBSTACLE_COUNT, SECOND_WAVE_SCORE, SPAWN_ATTEMPTS};

/// When an inactive slot starts descending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Active from round start
    AtStart,
    /// Once another slot reaches the given row
    WhenObstacleAt { leader: usize, row: i32 },
    /// Once the score reaches the threshold; restarts from the top row
    AtScore(u32),
}

/// Activation rule per slot
pub const ACTIVATION_RULES: [Activation; OBSTACLE_COUNT] = [
    Activation::AtStart,
    Activation::WhenObstacleAt {
        leader: 0,
        row: MIDWAY_ROW,
    },
    Activation::AtScore(SECOND_WAVE_SCORE),
];

/// A falling obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    /// Slot index, fixed for the round
    pub id: usize,
    /// Leftmost column
    pub x: i32,
    /// Top row
    pub y: i32,
    pub active: bool,
}

/// Fixed-size obstacle arena
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObstacleSet {
    slots: [Obstacle; OBSTACLE_COUNT],
}

impl ObstacleSet {
    /// All slots at the top row, active per their rule, with spawned columns
    pub fn new<R: Rng>(field: &Playfield, rng: &mut R) -> Self {
        let mut slots = [Obstacle {
            id: 0,
            x: field.lane_min,
            y: field.top_row,
            active: false,
        }; OBSTACLE_COUNT];
        for (i, slot) in slots.iter_mut().enumerate() {
            slot.id = i;
            slot.active = ACTIVATION_RULES[i] == Activation::AtStart;
        }

        let mut set = Self { slots };
        for i in 0..OBSTACLE_COUNT {
            set.slots[i].x = set.spawn_position(i, field, rng);
        }
        set
    }

    /// Build from explicit slots (tests and replays)
    pub fn from_slots(slots: [Obstacle; OBSTACLE_COUNT]) -> Self {
        Self { slots }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.slots.iter()
    }

    pub fn active(&self) -> impl Iterator<Item = &Obstacle> {
        self.slots.iter().filter(|o| o.active)
    }

    pub fn get(&self, index: usize) -> Option<&Obstacle> {
        self.slots.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Obstacle> {
        self.slots.get_mut(index)
    }

    /// Pick a column for slot `exclude` away from the other active slots
    pub fn spawn_position<R: Rng>(
        &self,
        exclude: usize,
        field: &Playfield,
        rng: &mut R,
    ) -> i32 {
        self.spawn_position_with(exclude, field, || {
            field.lane_min + rng.random_range(0..field.spawn_span)
        })
    }

    /// Spawn using an arbitrary column source.
    ///
    /// Draws at most `SPAWN_ATTEMPTS` candidates and returns the first one at
    /// least `spawn_separation()` columns from every other active slot. If all
    /// of them conflict, the last draw is used anyway.
    pub fn spawn_position_with(
        &self,
        exclude: usize,
        field: &Playfield,
        mut draw: impl FnMut() -> i32,
    ) -> i32 {
        let separation = field.spawn_separation();
        let mut candidate = draw();
        for attempt in 1..=SPAWN_ATTEMPTS {
            let conflict = self
                .slots
                .iter()
                .any(|o| o.id != exclude && o.active && (candidate - o.x).abs() < separation);
            if !conflict {
                return candidate;
            }
            if attempt == SPAWN_ATTEMPTS {
                log::debug!("Obstacle {exclude}: no free column after {SPAWN_ATTEMPTS} draws");
                break;
            }
            candidate = draw();
        }
        candidate
    }

    /// Wake any inactive slot whose rule is now satisfied.
    ///
    /// Returns the number of slots activated.
    pub fn apply_activation(&mut self, score: u32, field: &Playfield) -> usize {
        let mut woke = 0;
        for i in 0..OBSTACLE_COUNT {
            if self.slots[i].active {
                continue;
            }
            let ready = match ACTIVATION_RULES[i] {
                Activation::AtStart => true,
                Activation::WhenObstacleAt { leader, row } => {
                    self.slots.get(leader).is_some_and(|o| o.y == row)
                }
                Activation::AtScore(threshold) => {
                    if score >= threshold {
                        self.slots[i].y = field.top_row;
                        true
                    } else {
                        false
                    }
                }
            };
            if ready {
                self.slots[i].active = true;
                woke += 1;
                log::debug!("Obstacle {i} activated at score {score}");
            }
        }
        woke
    }

    /// Move every active slot down one row
    pub fn advance(&mut self) {
        for o in self.slots.iter_mut().filter(|o| o.active) {
            o.y += 1;
        }
    }

    /// Whether slot `index` is active and below the exit row
    pub fn has_exited(&self, index: usize, field: &Playfield) -> bool {
        self.slots
            .get(index)
            .is_some_and(|o| o.active && o.y > field.exit_row)
    }

    /// Send slot `index` back to the top row at a new column. Activation is kept.
    pub fn recycle<R: Rng>(&mut self, index: usize, field: &Playfield, rng: &mut R) {
        let x = self.spawn_position(index, field, rng);
        if let Some(o) = self.slots.get_mut(index) {
            o.y = field.top_row;
            o.x = x;
            log::debug!("Obstacle {index} recycled to column {x}");
        }
    }
}
