//! Simulated clock.

use serde::{Deserialize, Serialize};

/// Non-decreasing simulation time.
///
/// Only the active scheduler run mutates the clock. Every mutator refuses to
/// move time backwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SimulationClock(i64);

impl SimulationClock {
    /// Creates a clock at t=0.
    pub fn new() -> Self {
        Self(0)
    }

    /// Current time.
    #[inline]
    pub fn now(&self) -> i64 {
        self.0
    }

    /// Jumps forward to `time` (idle gap). No-op if `time` is in the past.
    pub fn advance_to(&mut self, time: i64) {
        self.0 = self.0.max(time);
    }

    /// Runs the CPU for `ticks`.
    pub fn advance_by(&mut self, ticks: i64) {
        debug_assert!(ticks >= 0, "clock cannot run backwards");
        self.0 = self.0.saturating_add(ticks.max(0));
    }

    /// Stops the clock at the horizon.
    pub fn stop_at(&mut self, horizon: i64) {
        debug_assert!(self.0 <= horizon, "clock already past the horizon");
        self.0 = horizon;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_monotonic() {
        let mut clock = SimulationClock::new();
        clock.advance_to(5);
        assert_eq!(clock.now(), 5);
        clock.advance_to(3);
        assert_eq!(clock.now(), 5);
        clock.advance_by(4);
        assert_eq!(clock.now(), 9);
        clock.stop_at(12);
        assert_eq!(clock.now(), 12);
    }

    #[test]
    fn test_advance_by_saturates() {
        let mut clock = SimulationClock::new();
        clock.advance_to(10);
        clock.advance_by(i64::MAX);
        assert_eq!(clock.now(), i64::MAX);
    }
}
