use std::time::Duration;

use super::scheduler::{StepHandle, StepScheduler};
use crate::domain::{GridState, advance_generation};

/// Animation state. `Idle` covers both "never started" and "paused"; the
/// distinction has no behavioral consequence.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RunState {
    Idle,
    Running,
}

/// Drives repeated generation steps at a fixed interval.
///
/// All transitions happen on the caller's thread of control: the owner
/// calls [`tick`](Self::tick) from its event loop with the elapsed time,
/// and edits made between ticks are simply part of the grid the next fired
/// step reads. `pause` and `reset` cancel the pending step through the
/// scheduler, so a cancelled step can never fire afterwards.
pub struct AnimationController {
    state: RunState,
    scheduler: StepScheduler,
    pending: Option<StepHandle>,
}

impl AnimationController {
    pub fn new(step_delay: Duration) -> Self {
        Self {
            state: RunState::Idle,
            scheduler: StepScheduler::new(step_delay),
            pending: None,
        }
    }

    pub const fn state(&self) -> RunState {
        self.state
    }

    pub const fn is_running(&self) -> bool {
        matches!(self.state, RunState::Running)
    }

    pub const fn step_delay(&self) -> Duration {
        self.scheduler.delay()
    }

    /// Begin (or resume) the animation; the first step is due immediately.
    /// No-op while already running.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.state = RunState::Running;
        self.pending = Some(self.scheduler.schedule_immediate());
    }

    /// Stop stepping; the pending step is cancelled before it can fire.
    /// No-op while already idle.
    pub fn pause(&mut self) {
        if !self.is_running() {
            return;
        }
        self.state = RunState::Idle;
        self.cancel_pending();
    }

    /// Force idle from any state and clear the grid.
    pub fn reset(&mut self, grid: &mut GridState) {
        self.cancel_pending();
        self.state = RunState::Idle;
        grid.reset_all();
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }

    /// Feed elapsed time to the scheduler. When the pending step comes due,
    /// advance the grid one generation and, only if still running, schedule
    /// the next step after the fixed delay.
    ///
    /// Returns whether a generation was committed, so the caller knows the
    /// visible grid changed.
    pub fn tick(&mut self, grid: &mut GridState, elapsed: Duration) -> bool {
        let Some(fired) = self.scheduler.advance(elapsed) else {
            return false;
        };
        if self.pending != Some(fired) {
            return false;
        }
        self.pending = None;

        advance_generation(grid);
        if self.is_running() {
            self.pending = Some(self.scheduler.schedule());
        }
        true
    }
}
