//! Scheduling events and trace sinks.
//!
//! Every scheduler reports its decisions as a sequence of
//! [`SchedulingEvent`]s. A [`TraceSink`] receives them as they happen;
//! the numeric content of the sequence is part of the run's contract,
//! the textual rendering is not.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

/// A single scheduling decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SchedulingEvent {
    /// Process dispatched onto the CPU.
    Scheduled {
        /// Clock value at dispatch.
        time: i64,
        /// Process ID.
        pid: i64,
        /// CPU demand still outstanding at dispatch.
        cpu: i64,
    },
    /// Process preempted at quantum expiry (Round-Robin only).
    Suspended {
        time: i64,
        pid: i64,
        /// CPU demand still outstanding after the quantum.
        cpu: i64,
    },
    /// Process ran to completion.
    Terminated { time: i64, pid: i64 },
    /// The horizon was reached; the run stops here.
    SimulationTerminated { time: i64 },
}

impl SchedulingEvent {
    /// Clock value carried by the event.
    pub fn time(&self) -> i64 {
        match *self {
            Self::Scheduled { time, .. }
            | Self::Suspended { time, .. }
            | Self::Terminated { time, .. }
            | Self::SimulationTerminated { time } => time,
        }
    }

    /// Process ID, if the event concerns one process.
    pub fn pid(&self) -> Option<i64> {
        match *self {
            Self::Scheduled { pid, .. }
            | Self::Suspended { pid, .. }
            | Self::Terminated { pid, .. } => Some(pid),
            Self::SimulationTerminated { .. } => None,
        }
    }
}

impl fmt::Display for SchedulingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Scheduled { time, pid, cpu } => {
                write!(f, "{time:>7}: Scheduling PID {pid:>7}, CPU = {cpu:>7}")
            }
            Self::Suspended { time, pid, cpu } => {
                write!(f, "{time:>7}: Suspending PID {pid:>7}, CPU = {cpu:>7}")
            }
            Self::Terminated { time, pid } => {
                write!(f, "{time:>7}:            PID {pid:>7}  terminated")
            }
            Self::SimulationTerminated { time } => {
                write!(f, "{time:>7}:            SIMULATION   terminated")
            }
        }
    }
}

/// Receiver of scheduling events.
pub trait TraceSink {
    /// Records one event.
    fn record(&mut self, event: SchedulingEvent);
}

/// Collects events in memory.
impl TraceSink for Vec<SchedulingEvent> {
    fn record(&mut self, event: SchedulingEvent) {
        self.push(event);
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTrace;

impl TraceSink for NullTrace {
    fn record(&mut self, _event: SchedulingEvent) {}
}

/// Writes one formatted line per event.
///
/// Write failures are logged and otherwise ignored: the trace is a
/// diagnostic, losing it must not abort the simulation.
#[derive(Debug)]
pub struct WriterTrace<W: Write> {
    writer: W,
}

impl<W: Write> WriterTrace<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Writes an arbitrary line (banners, statistics block).
    pub fn line(&mut self, line: impl fmt::Display) {
        if let Err(e) = writeln!(self.writer, "{line}") {
            log::warn!("trace write failed: {e}");
        }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for WriterTrace<W> {
    fn record(&mut self, event: SchedulingEvent) {
        self.line(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_lines() {
        let sched = SchedulingEvent::Scheduled {
            time: 0,
            pid: 1,
            cpu: 5,
        };
        assert_eq!(
            sched.to_string(),
            "      0: Scheduling PID       1, CPU =       5"
        );

        let done = SchedulingEvent::Terminated { time: 5, pid: 1 };
        assert_eq!(done.to_string(), "      5:            PID       1  terminated");

        let stop = SchedulingEvent::SimulationTerminated { time: 100 };
        assert_eq!(stop.to_string(), "    100:            SIMULATION   terminated");
    }

    #[test]
    fn test_accessors() {
        let e = SchedulingEvent::Suspended {
            time: 4,
            pid: 9,
            cpu: 2,
        };
        assert_eq!(e.time(), 4);
        assert_eq!(e.pid(), Some(9));
        assert_eq!(SchedulingEvent::SimulationTerminated { time: 3 }.pid(), None);
    }

    #[test]
    fn test_writer_trace() {
        let mut trace = WriterTrace::new(Vec::new());
        trace.record(SchedulingEvent::Terminated { time: 8, pid: 2 });
        trace.record(SchedulingEvent::SimulationTerminated { time: 9 });
        let out = String::from_utf8(trace.into_inner()).unwrap();
        assert_eq!(out.lines().count(), 2);
        assert!(out.starts_with("      8:"));
    }

    #[test]
    fn test_serde_tagged() {
        let e = SchedulingEvent::Terminated { time: 5, pid: 1 };
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(json, r#"{"event":"terminated","time":5,"pid":1}"#);
    }
}
