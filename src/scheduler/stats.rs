//! Run statistics.
//!
//! Accumulates completion and wait-time totals during a run and derives
//! the averages once, at the end.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Throughput | Processes that ran to completion |
//! | Total Wait Time | Sum of per-policy wait contributions |
//! | Total Turnaround | `time_passed + total_wait_time` |
//! | Avg Wait Time | `total_wait / throughput` (`throughput + 1` when truncated) |
//! | Avg Turnaround | `total_turnaround / throughput` |
//! | Remaining Tasks | Processes never completed |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Running totals owned by one scheduling run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStatistics {
    /// Completed process count.
    pub throughput: usize,
    /// Accumulated wait time.
    pub total_wait_time: i64,
    /// Final clock value.
    pub time_passed: i64,
    /// Processes not (yet) completed.
    pub remaining_tasks: usize,
}

impl RunStatistics {
    /// Creates empty totals for a run over `process_count` processes.
    pub fn new(process_count: usize) -> Self {
        Self {
            remaining_tasks: process_count,
            ..Default::default()
        }
    }

    /// Records one completion.
    pub fn record_completion(&mut self) {
        self.throughput += 1;
        self.remaining_tasks = self.remaining_tasks.saturating_sub(1);
    }

    /// Adds a wait-time contribution.
    pub fn add_wait(&mut self, wait: i64) {
        self.total_wait_time = self.total_wait_time.saturating_add(wait);
    }

    /// Whether processes other than the one in flight are still pending.
    #[inline]
    pub fn others_pending(&self) -> bool {
        self.remaining_tasks > 1
    }

    /// Derives the final report.
    ///
    /// A run cut short by the horizon divides wait time by `throughput + 1`,
    /// counting the truncated in-flight process as having waited.
    pub fn finalize(&self) -> RunReport {
        let total_turnaround = self.time_passed.saturating_add(self.total_wait_time);

        let (avg_wait_time, avg_turnaround_time) = if self.throughput == 0 {
            (0.0, 0.0)
        } else if self.remaining_tasks == 0 {
            let n = self.throughput as f64;
            (self.total_wait_time as f64 / n, total_turnaround as f64 / n)
        } else {
            let n = self.throughput as f64;
            (
                self.total_wait_time as f64 / (n + 1.0),
                total_turnaround as f64 / n,
            )
        };

        RunReport {
            time_passed: self.time_passed,
            total_wait_time: self.total_wait_time,
            total_turnaround,
            throughput: self.throughput,
            avg_wait_time,
            avg_turnaround_time,
            remaining_tasks: self.remaining_tasks,
        }
    }
}

/// Final statistics of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Final clock value.
    pub time_passed: i64,
    /// Accumulated wait time.
    pub total_wait_time: i64,
    /// `time_passed + total_wait_time`.
    pub total_turnaround: i64,
    /// Completed process count.
    pub throughput: usize,
    /// Average wait time.
    pub avg_wait_time: f64,
    /// Average turnaround time.
    pub avg_turnaround_time: f64,
    /// Processes never completed.
    pub remaining_tasks: usize,
}

impl RunReport {
    /// Whether the horizon cut the run short.
    pub fn truncated(&self) -> bool {
        self.remaining_tasks > 0
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Time passed       =          {:>7}", self.time_passed)?;
        writeln!(f, "Total Wait Time   =          {:>7}", self.total_wait_time)?;
        writeln!(f, "Total Turnaround  =          {:>7}", self.total_turnaround)?;
        writeln!(f)?;
        writeln!(f, "Throughput =          {:>10}", self.throughput)?;
        writeln!(f, "Avg Wait Time =       {:>10.6}", self.avg_wait_time)?;
        writeln!(f, "Avg Turnaround Time = {:>10.6}", self.avg_turnaround_time)?;
        write!(f, "Remaining Tasks =     {:>10}", self.remaining_tasks)
    }
}
