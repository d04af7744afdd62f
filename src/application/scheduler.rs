use std::time::Duration;

/// Inter-generation delay of the reference deployment.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(110);

/// Identifies one scheduled step. Handles are never reused, so a stale
/// handle held after cancellation can't match a later step.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StepHandle(u64);

/// Cooperative single-slot timer for the animation loop.
///
/// At most one step is pending at any time. The owner feeds elapsed time in
/// via [`advance`](Self::advance); a step fires at most once, and only if it
/// has not been cancelled beforehand. There is no background thread, so a
/// cancellation observed here is synchronous and final.
pub struct StepScheduler {
    delay: Duration,
    next_id: u64,
    pending: Option<(StepHandle, Duration)>,
}

impl StepScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            next_id: 0,
            pending: None,
        }
    }

    pub const fn delay(&self) -> Duration {
        self.delay
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn schedule_after(&mut self, delay: Duration) -> StepHandle {
        let handle = StepHandle(self.next_id);
        self.next_id += 1;
        self.pending = Some((handle, delay));
        handle
    }

    /// Schedule a step after the configured delay, replacing any pending one.
    pub fn schedule(&mut self) -> StepHandle {
        self.schedule_after(self.delay)
    }

    /// Schedule a step that is due on the next `advance` call.
    pub fn schedule_immediate(&mut self) -> StepHandle {
        self.schedule_after(Duration::ZERO)
    }

    /// Cancel the pending step if `handle` still refers to it. After this
    /// returns, that step can no longer fire.
    pub fn cancel(&mut self, handle: StepHandle) {
        if self.pending.map(|(pending, _)| pending) == Some(handle) {
            self.pending = None;
        }
    }

    /// Cancel whatever step is pending, if any.
    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    /// Consume elapsed time; returns the pending step's handle once it
    /// comes due. Surplus time is not banked across steps: a long stall
    /// fires one step, not a burst.
    pub fn advance(&mut self, elapsed: Duration) -> Option<StepHandle> {
        let (handle, remaining) = self.pending?;
        match remaining.checked_sub(elapsed) {
            Some(remaining) if !remaining.is_zero() => {
                self.pending = Some((handle, remaining));
                None
            }
            _ => {
                self.pending = None;
                Some(handle)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(110);

    #[test]
    fn step_fires_only_once_due() {
        let mut sched = StepScheduler::new(DELAY);
        let handle = sched.schedule();

        assert_eq!(sched.advance(Duration::from_millis(50)), None);
        assert_eq!(sched.advance(Duration::from_millis(60)), Some(handle));
        // fired exactly once
        assert_eq!(sched.advance(Duration::from_millis(500)), None);
    }

    #[test]
    fn immediate_step_fires_with_zero_elapsed() {
        let mut sched = StepScheduler::new(DELAY);
        let handle = sched.schedule_immediate();
        assert_eq!(sched.advance(Duration::ZERO), Some(handle));
    }

    #[test]
    fn cancelled_step_never_fires() {
        let mut sched = StepScheduler::new(DELAY);
        let handle = sched.schedule();
        sched.cancel(handle);

        assert!(!sched.has_pending());
        assert_eq!(sched.advance(DELAY), None);
    }

    #[test]
    fn stale_handle_does_not_cancel_a_newer_step() {
        let mut sched = StepScheduler::new(DELAY);
        let old = sched.schedule();
        let new = sched.schedule();
        assert_ne!(old, new);

        sched.cancel(old);
        assert!(sched.has_pending());
        assert_eq!(sched.advance(DELAY), Some(new));
    }

    #[test]
    fn stall_fires_a_single_step() {
        let mut sched = StepScheduler::new(DELAY);
        let handle = sched.schedule();
        assert_eq!(sched.advance(Duration::from_secs(10)), Some(handle));
        assert!(!sched.has_pending());
    }
}
