//! Shortest-Job-First (non-preemptive, arrival-gated).
//!
//! # Algorithm
//!
//! 1. Among pending processes that arrived strictly before the clock, pick
//!    the smallest burst time (ties: earliest arrival, then input order).
//! 2. If none has arrived, pick the earliest arrival (ties: smallest burst,
//!    then input order) and idle the clock up to it.
//! 3. Remove it from the pending set and run it to completion.
//!
//! # Complexity
//! O(n²): every selection rescans the pending set.

use super::event::TraceSink;
use super::run::Run;
use super::stats::RunStatistics;
use super::Scheduler;
use crate::dispatching::{rules, DispatchContext, RuleEngine};
use crate::models::{ProcessSet, SequencedProcess};

/// Non-preemptive Shortest-Job-First scheduler.
#[derive(Debug, Clone)]
pub struct SjfScheduler {
    ready: RuleEngine,
    idle: RuleEngine,
}

impl SjfScheduler {
    /// Creates the scheduler: SPT → FIFO among arrived processes,
    /// FIFO → SPT while the CPU idles.
    pub fn new() -> Self {
        Self {
            ready: RuleEngine::new()
                .with_rule(rules::Spt)
                .with_tie_breaker(rules::Fifo),
            idle: RuleEngine::new()
                .with_rule(rules::Fifo)
                .with_tie_breaker(rules::Spt),
        }
    }

    fn select(&self, pending: &[SequencedProcess], now: i64) -> Option<usize> {
        let ctx = DispatchContext::at_time(now);
        self.ready
            .select_arrived(pending, &ctx)
            .or_else(|| self.idle.select_best(pending, &ctx))
    }
}

impl Default for SjfScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for SjfScheduler {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn run(&self, processes: &ProcessSet, horizon: i64, sink: &mut dyn TraceSink) -> RunStatistics {
        let mut run = Run::new(horizon, processes.len(), sink);
        let mut pending = processes.arrival_order();

        while let Some(idx) = self.select(&pending, run.now()) {
            let next = pending.remove(idx);
            log::debug!(
                "SJF selected pid {} (burst {}) at t={}, {} pending",
                next.process.id,
                next.process.burst_time,
                run.now(),
                pending.len()
            );
            if run.run_to_completion(&next.process).is_break() {
                break;
            }
        }

        run.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::SchedulingEvent;

    fn run(triplets: &[i64], horizon: i64) -> (Vec<SchedulingEvent>, RunStatistics) {
        let mut events = Vec::new();
        let stats =
            SjfScheduler::new().run(&ProcessSet::from_triplets(triplets), horizon, &mut events);
        (events, stats)
    }

    fn dispatch_order(events: &[SchedulingEvent]) -> Vec<i64> {
        events
            .iter()
            .filter(|e| matches!(e, SchedulingEvent::Scheduled { .. }))
            .filter_map(|e| e.pid())
            .collect()
    }

    #[test]
    fn test_basic_scenario() {
        let (events, stats) = run(&[1, 0, 5, 2, 1, 3, 3, 2, 8], 100);
        assert_eq!(dispatch_order(&events), vec![1, 2, 3]);
        assert_eq!(stats.throughput, 3);
        assert_eq!(stats.remaining_tasks, 0);
        assert_eq!(stats.time_passed, 16);
    }

    #[test]
    fn test_shortest_arrived_first() {
        // After p1 ends at 10, p3 (burst 1) beats p2 (burst 6)
        let (events, _) = run(&[1, 0, 10, 2, 1, 6, 3, 2, 1], 100);
        assert_eq!(dispatch_order(&events), vec![1, 3, 2]);
    }

    #[test]
    fn test_unarrived_short_job_waits() {
        // At t=4, p3 (burst 1) has not arrived; p2 runs first
        let (events, _) = run(&[1, 0, 4, 2, 1, 5, 3, 6, 1], 100);
        assert_eq!(dispatch_order(&events), vec![1, 2, 3]);
    }

    #[test]
    fn test_burst_tie_prefers_earlier_arrival() {
        let (events, _) = run(&[1, 0, 6, 2, 3, 2, 3, 1, 2], 100);
        assert_eq!(dispatch_order(&events), vec![1, 3, 2]);
    }

    #[test]
    fn test_never_dispatched_before_arrival() {
        let (events, _) = run(&[1, 5, 3, 2, 20, 1, 3, 9, 2], 100);
        let set = ProcessSet::from_triplets(&[1, 5, 3, 2, 20, 1, 3, 9, 2]);
        for e in &events {
            if let SchedulingEvent::Scheduled { time, pid, .. } = *e {
                let p = set.iter().find(|p| p.id == pid).unwrap();
                assert!(time >= p.arrival_time);
            }
        }
    }

    #[test]
    fn test_idle_picks_earliest_arrival() {
        // Nothing arrived at t=0; p1 arrives first even though p2 is shorter
        let (events, _) = run(&[1, 0, 5, 2, 1, 3], 100);
        assert_eq!(dispatch_order(&events), vec![1, 2]);

        // Same arrival: the shorter one goes first
        let (events, _) = run(&[1, 2, 5, 2, 2, 3], 100);
        assert_eq!(dispatch_order(&events), vec![2, 1]);
    }

    #[test]
    fn test_truncation() {
        let (events, stats) = run(&[1, 0, 5, 2, 1, 9], 8);
        assert_eq!(
            events.last(),
            Some(&SchedulingEvent::SimulationTerminated { time: 8 })
        );
        assert_eq!(stats.throughput, 1);
        assert_eq!(stats.remaining_tasks, 1);
    }

    #[test]
    fn test_empty() {
        let (events, stats) = run(&[], 5);
        assert!(events.is_empty());
        assert_eq!(stats.throughput, 0);
    }
}
