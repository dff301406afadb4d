//! Dispatch context for rule evaluation.

use crate::models::Process;

/// Runtime state passed to dispatching rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchContext {
    /// Current simulation time.
    pub now: i64,
}

impl DispatchContext {
    /// Creates a context at the given time.
    pub fn at_time(now: i64) -> Self {
        Self { now }
    }

    /// Whether the process arrived strictly before the current clock.
    ///
    /// A process arriving exactly at `now` does not count as arrived for
    /// selection purposes.
    #[inline]
    pub fn has_arrived(&self, process: &Process) -> bool {
        process.arrival_time < self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_arrived_is_strict() {
        let ctx = DispatchContext::at_time(5);
        assert!(ctx.has_arrived(&Process::new(1, 4, 1)));
        assert!(!ctx.has_arrived(&Process::new(2, 5, 1)));
        assert!(!ctx.has_arrived(&Process::new(3, 9, 1)));
    }
}
