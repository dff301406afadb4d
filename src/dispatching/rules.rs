//! Built-in dispatching rules.
//!
//! All rules return lower scores for higher priority processes.

use super::{DispatchContext, DispatchingRule, RuleScore};
use crate::models::Process;

/// Shortest Processing Time.
///
/// Prioritizes processes with the smaller total burst time. This is the
/// selection key of non-preemptive Shortest-Job-First.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, process: &Process, _context: &DispatchContext) -> RuleScore {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

/// First In First Out.
///
/// Prioritizes processes by arrival time.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, process: &Process, _context: &DispatchContext) -> RuleScore {
        process.arrival_time
    }

    fn description(&self) -> &'static str {
        "First In First Out"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spt() {
        let ctx = DispatchContext::at_time(0);
        let short = Process::new(1, 10, 2);
        let long = Process::new(2, 0, 9);
        assert!(Spt.evaluate(&short, &ctx) < Spt.evaluate(&long, &ctx));
    }

    #[test]
    fn test_fifo() {
        let ctx = DispatchContext::at_time(0);
        let early = Process::new(1, 1, 50);
        let late = Process::new(2, 7, 1);
        assert!(Fifo.evaluate(&early, &ctx) < Fifo.evaluate(&late, &ctx));
    }

    #[test]
    fn test_names() {
        assert_eq!(Spt.name(), "SPT");
        assert_eq!(Fifo.description(), "First In First Out");
    }
}
