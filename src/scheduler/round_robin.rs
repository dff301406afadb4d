//! Round-Robin with a fixed time slice.
//!
//! # Algorithm
//!
//! All processes are loaded into a FIFO ready queue in arrival order before
//! the clock starts; nothing is inserted mid-run. Each iteration looks at the
//! queue head:
//!
//! 1. A head that has not arrived yet (clock running, `clock <= arrival`) is
//!    rotated to the back, at most once per queued process in a row.
//! 2. Otherwise the clock idles up to the head's arrival and it is dispatched.
//! 3. If the next quantum would cross the horizon, or the sole remaining
//!    process cannot finish before it, the run stops at the horizon.
//! 4. A process needing more than one quantum while others wait is
//!    preempted and requeued; otherwise it runs to completion.
//!
//! Wait-time accounting follows the classic course simulator this models:
//! the completion formula reads the *next* head's last dispatch time.

use std::collections::VecDeque;

use super::event::{SchedulingEvent, TraceSink};
use super::run::Run;
use super::stats::RunStatistics;
use super::Scheduler;
use crate::models::{Process, ProcessSet};

/// Per-run state of a queued process.
#[derive(Debug, Clone, Copy)]
struct RunningProcess {
    process: Process,
    remaining_burst: i64,
    last_scheduled_at: i64,
}

impl RunningProcess {
    fn new(process: Process) -> Self {
        Self {
            process,
            remaining_burst: process.burst_time,
            last_scheduled_at: 0,
        }
    }
}

/// Preemptive Round-Robin scheduler.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobinScheduler {
    time_slice: i64,
}

impl RoundRobinScheduler {
    /// Creates a scheduler with the given quantum.
    ///
    /// The quantum must be at least one tick; `Policy` validates this for
    /// callers going through `Simulation`.
    pub fn new(time_slice: i64) -> Self {
        debug_assert!(time_slice >= 1, "time slice must be positive");
        Self { time_slice }
    }

    /// Quantum length.
    pub fn time_slice(&self) -> i64 {
        self.time_slice
    }
}

impl Scheduler for RoundRobinScheduler {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn run(&self, processes: &ProcessSet, horizon: i64, sink: &mut dyn TraceSink) -> RunStatistics {
        let mut run = Run::new(horizon, processes.len(), sink);
        let mut queue: VecDeque<RunningProcess> = processes
            .arrival_order()
            .into_iter()
            .map(|entry| RunningProcess::new(entry.process))
            .collect();
        let admitted = queue.len();
        let mut rotations = 0;

        while let Some(mut head) = queue.pop_front() {
            let now = run.now();
            if now <= head.process.arrival_time && now != 0 && rotations < admitted {
                rotations += 1;
                queue.push_back(head);
                continue;
            }
            rotations = 0;

            if run.admit(&head.process).is_break() {
                break;
            }
            run.emit(SchedulingEvent::Scheduled {
                time: run.now(),
                pid: head.process.id,
                cpu: head.remaining_burst,
            });

            let sole = queue.is_empty();
            let left = horizon - run.now();
            if self.time_slice > left || (sole && head.remaining_burst > left) {
                if run.stats_mut().others_pending() {
                    let wait = horizon - head.last_scheduled_at - head.process.arrival_time;
                    run.stats_mut().add_wait(wait);
                }
                log::debug!("RR horizon reached while pid {} in flight", head.process.id);
                run.truncate();
                break;
            }

            if head.remaining_burst > self.time_slice && !sole {
                head.remaining_burst -= self.time_slice;
                run.clock_mut().advance_by(self.time_slice);
                let wait = run.now() - head.last_scheduled_at;
                run.stats_mut().add_wait(wait);
                head.last_scheduled_at = run.now();

                run.emit(SchedulingEvent::Suspended {
                    time: run.now(),
                    pid: head.process.id,
                    cpu: head.remaining_burst,
                });
                queue.push_back(head);
            } else {
                run.clock_mut().advance_by(head.remaining_burst);
                run.stats_mut().record_completion();
                if run.stats_mut().remaining_tasks != 0 {
                    if let Some(next) = queue.front() {
                        let wait = run.now() - next.last_scheduled_at - head.process.arrival_time;
                        run.stats_mut().add_wait(wait);
                    }
                }

                run.emit(SchedulingEvent::Terminated {
                    time: run.now(),
                    pid: head.process.id,
                });
            }
        }

        run.finish()
    }
}
