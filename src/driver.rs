// SPDX-License-Identifier: MPL-2.0
//! Fixed-timestep pacing for the toast update loop.
//!
//! Wall-clock time is accumulated between ticks and converted into whole
//! fixed steps, so a late tick runs several catch-up steps and the
//! simulation speed stays independent of the host frame rate.

use std::time::{Duration, Instant};

/// Target step of the update loop (~30 Hz).
pub const STEP: Duration = Duration::from_millis(33);

/// Seconds per fixed step, the `dt` handed to the layout pass.
pub const STEP_SECS: f32 = 0.033;

/// Accumulates wall-clock time into whole fixed steps.
#[derive(Debug, Default)]
pub struct FixedStep {
    last: Option<Instant>,
    accumulator: Duration,
}

impl FixedStep {
    /// Creates a pacer with no elapsed time.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the pacer to `now`, returning how many fixed steps to run.
    pub fn advance(&mut self, now: Instant) -> u32 {
        let elapsed = match self.last {
            Some(last) => now.saturating_duration_since(last),
            None => Duration::ZERO,
        };
        self.last = Some(now);
        self.accumulator += elapsed;

        let mut steps = 0;
        while self.accumulator >= STEP {
            self.accumulator -= STEP;
            steps += 1;
        }
        steps
    }

    /// Forgets elapsed time, so the next `advance` starts a fresh interval.
    ///
    /// Called when the loop goes idle; otherwise the idle period would be
    /// replayed as a burst of catch-up steps.
    pub fn reset(&mut self) {
        self.last = None;
        self.accumulator = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_advance_runs_no_steps() {
        let mut pacer = FixedStep::new();
        assert_eq!(pacer.advance(Instant::now()), 0);
    }

    #[test]
    fn one_step_per_elapsed_interval() {
        let mut pacer = FixedStep::new();
        let t0 = Instant::now();
        pacer.advance(t0);
        assert_eq!(pacer.advance(t0 + STEP), 1);
    }

    #[test]
    fn late_tick_runs_catch_up_steps() {
        let mut pacer = FixedStep::new();
        let t0 = Instant::now();
        pacer.advance(t0);
        assert_eq!(pacer.advance(t0 + STEP * 4), 4);
    }

    #[test]
    fn remainder_carries_over_between_ticks() {
        let mut pacer = FixedStep::new();
        let t0 = Instant::now();
        pacer.advance(t0);

        let half = STEP / 2;
        assert_eq!(pacer.advance(t0 + half), 0);
        assert_eq!(pacer.advance(t0 + half + half + half), 1);
    }

    #[test]
    fn reset_discards_the_idle_period() {
        let mut pacer = FixedStep::new();
        let t0 = Instant::now();
        pacer.advance(t0);
        pacer.reset();

        // A long idle gap must not replay as a burst.
        assert_eq!(pacer.advance(t0 + STEP * 100), 0);
        assert_eq!(pacer.advance(t0 + STEP * 101), 1);
    }
}
