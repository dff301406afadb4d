//! First-Come-First-Served.
//!
//! Dispatches processes strictly by arrival time, ties in input order.
//! No preemption: each process runs to completion or until the horizon.

use super::event::TraceSink;
use super::run::Run;
use super::stats::RunStatistics;
use super::Scheduler;
use crate::models::ProcessSet;

/// First-Come-First-Served scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct FcfsScheduler;

impl FcfsScheduler {
    /// Creates the scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for FcfsScheduler {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn run(&self, processes: &ProcessSet, horizon: i64, sink: &mut dyn TraceSink) -> RunStatistics {
        let mut run = Run::new(horizon, processes.len(), sink);

        for entry in processes.arrival_order() {
            log::debug!("FCFS dispatching pid {} at t={}", entry.process.id, run.now());
            if run.run_to_completion(&entry.process).is_break() {
                break;
            }
        }

        run.finish()
    }
}
