//! State threaded through one scheduling run.
//!
//! Owns the clock, the statistics accumulator and the trace sink for the
//! duration of a run. Nothing here outlives the run.

use std::ops::ControlFlow;

use super::event::{SchedulingEvent, TraceSink};
use super::stats::RunStatistics;
use crate::models::{Process, SimulationClock};

pub(crate) struct Run<'a> {
    horizon: i64,
    clock: SimulationClock,
    stats: RunStatistics,
    sink: &'a mut dyn TraceSink,
}

impl<'a> Run<'a> {
    pub(crate) fn new(horizon: i64, process_count: usize, sink: &'a mut dyn TraceSink) -> Self {
        Self {
            horizon,
            clock: SimulationClock::new(),
            stats: RunStatistics::new(process_count),
            sink,
        }
    }

    #[inline]
    pub(crate) fn now(&self) -> i64 {
        self.clock.now()
    }

    pub(crate) fn stats_mut(&mut self) -> &mut RunStatistics {
        &mut self.stats
    }

    pub(crate) fn clock_mut(&mut self) -> &mut SimulationClock {
        &mut self.clock
    }

    pub(crate) fn emit(&mut self, event: SchedulingEvent) {
        log::trace!("{event:?}");
        self.sink.record(event);
    }

    /// Idles the clock up to the process's arrival.
    ///
    /// A process arriving after the horizon can never run; the run stops at
    /// the horizon instead of jumping past it.
    pub(crate) fn admit(&mut self, process: &Process) -> ControlFlow<()> {
        if process.arrival_time > self.horizon {
            log::debug!(
                "pid {} arrives at {} beyond horizon {}",
                process.id,
                process.arrival_time,
                self.horizon
            );
            return self.stop();
        }
        if self.now() < process.arrival_time {
            log::debug!("idle from {} to {}", self.now(), process.arrival_time);
        }
        self.clock.advance_to(process.arrival_time);
        ControlFlow::Continue(())
    }

    /// Stops the clock at the horizon and emits the terminal event.
    pub(crate) fn truncate(&mut self) {
        self.clock.stop_at(self.horizon);
        self.emit(SchedulingEvent::SimulationTerminated {
            time: self.now(),
        });
    }

    fn stop(&mut self) -> ControlFlow<()> {
        self.truncate();
        ControlFlow::Break(())
    }

    /// Dispatches a process and runs it to completion, or to the horizon.
    ///
    /// Shared by the non-preemptive policies. On truncation the in-flight
    /// process contributes `horizon - arrival` to wait time only when other
    /// processes are still pending; on completion it contributes
    /// `completion - arrival` only when processes remain afterwards.
    pub(crate) fn run_to_completion(&mut self, process: &Process) -> ControlFlow<()> {
        self.admit(process)?;

        self.emit(SchedulingEvent::Scheduled {
            time: self.now(),
            pid: process.id,
            cpu: process.burst_time,
        });

        if process.burst_time > self.horizon - self.now() {
            if self.stats.others_pending() {
                self.stats.add_wait(self.horizon - process.arrival_time);
            }
            return self.stop();
        }

        self.clock.advance_by(process.burst_time);
        self.stats.record_completion();
        if self.stats.remaining_tasks != 0 {
            self.stats.add_wait(self.now() - process.arrival_time);
        }

        self.emit(SchedulingEvent::Terminated {
            time: self.now(),
            pid: process.id,
        });
        ControlFlow::Continue(())
    }

    pub(crate) fn finish(mut self) -> RunStatistics {
        self.stats.time_passed = self.clock.now();
        log::info!(
            "run finished at t={} (throughput {}, remaining {})",
            self.stats.time_passed,
            self.stats.throughput,
            self.stats.remaining_tasks
        );
        self.stats
    }
}
