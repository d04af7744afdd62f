use std::time::Duration;

use super::controller::{AnimationController, RunState};
use super::scheduler::DEFAULT_STEP_DELAY;
use crate::domain::{Cell, GridState, seed_random};
use rand::Rng;

/// How external edit events mutate the grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum EditMode {
    /// A discrete edit flips exactly one cell's liveness.
    #[default]
    Toggle,
    /// A continuous gesture sets touched cells alive, never dead.
    Paint,
}

/// The simulation context: one object owning the grid, the animation
/// controller, and the edit mode. Everything the view layer may do goes
/// through the command methods here; there is no other authoritative copy
/// of simulation state.
///
/// Gated commands fail soft: `randomize` while running is a no-op reported
/// by its return value, never an error. Edits are permitted in any state
/// and mutate the current generation directly, so an edit made while
/// running is picked up by the very next scheduled step.
pub struct Simulation {
    grid: GridState,
    controller: AnimationController,
    edit_mode: EditMode,
}

impl Simulation {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::with_step_delay(rows, cols, DEFAULT_STEP_DELAY)
    }

    pub fn with_step_delay(rows: usize, cols: usize, step_delay: Duration) -> Self {
        Self {
            grid: GridState::new(rows, cols),
            controller: AnimationController::new(step_delay),
            edit_mode: EditMode::default(),
        }
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub const fn edit_mode(&self) -> EditMode {
        self.edit_mode
    }

    pub const fn run_state(&self) -> RunState {
        self.controller.state()
    }

    pub const fn is_running(&self) -> bool {
        self.controller.is_running()
    }

    /// Start/Pause command: flip between running and idle.
    pub fn toggle_playback(&mut self) {
        if self.is_running() {
            self.controller.pause();
        } else {
            self.controller.start();
        }
    }

    /// Reset command: stop the animation and clear the grid. Valid and
    /// idempotent in any state.
    pub fn reset(&mut self) {
        self.controller.reset(&mut self.grid);
    }

    /// Randomize command. Refused while the animation is running; returns
    /// whether the grid was reseeded.
    pub fn randomize(&mut self) -> bool {
        self.randomize_with(&mut rand::rng())
    }

    /// Randomize with a caller-supplied generator (deterministic in tests).
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.is_running() {
            return false;
        }
        seed_random(&mut self.grid, rng);
        true
    }

    /// Toggle-draw-mode command: switch between toggle and paint editing.
    pub fn toggle_edit_mode(&mut self) {
        self.edit_mode = match self.edit_mode {
            EditMode::Toggle => EditMode::Paint,
            EditMode::Paint => EditMode::Toggle,
        };
    }

    /// Apply one edit event at a pre-normalized coordinate, honoring the
    /// active edit mode.
    pub fn apply_edit(&mut self, row: usize, col: usize) {
        match self.edit_mode {
            EditMode::Toggle => self.toggle_cell(row, col),
            EditMode::Paint => self.paint_cell(row, col),
        }
    }

    /// Flip one cell's liveness (toggle-mode edit).
    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        let flipped = self.grid.get(row, col).toggle();
        self.grid.set(row, col, flipped);
    }

    /// Set one cell alive (paint-mode edit); painting never kills.
    pub fn paint_cell(&mut self, row: usize, col: usize) {
        self.grid.set(row, col, Cell::Alive);
    }

    /// Drive the animation with elapsed wall time. Returns whether a
    /// generation was committed this tick.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        self.controller.tick(&mut self.grid, elapsed)
    }
}
