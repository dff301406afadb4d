//! Scheduling engine and run statistics.
//!
//! Replays one classical discipline over a process set on a simulated
//! clock bounded by a horizon, and reports aggregate statistics.
//!
//! # Policies
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | FCFS | no | arrival time |
//! | SJF | no | shortest burst among arrived processes |
//! | RR | yes (fixed quantum) | FIFO ready queue |
//!
//! # Usage
//!
//! ```
//! use u_cpusched::models::ProcessSet;
//! use u_cpusched::scheduler::{Policy, Simulation};
//!
//! let processes = ProcessSet::parse("1 0 5  2 1 3  3 2 8");
//! let sim = Simulation::new(100, Policy::Fcfs).unwrap();
//! let (events, report) = sim.run_collect(&processes);
//! assert_eq!(report.throughput, 3);
//! assert_eq!(events.last().map(|e| e.time()), Some(16));
//! ```

mod event;
mod fcfs;
mod round_robin;
mod run;
mod sjf;
mod stats;

pub use event::{NullTrace, SchedulingEvent, TraceSink, WriterTrace};
pub use fcfs::FcfsScheduler;
pub use round_robin::RoundRobinScheduler;
pub use sjf::SjfScheduler;
pub use stats::{RunReport, RunStatistics};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::models::ProcessSet;

/// A scheduling discipline.
///
/// Each run owns its clock, queue and accumulator; implementations keep no
/// state between runs.
pub trait Scheduler {
    /// Short policy name ("FCFS", "SJF", "RR").
    fn name(&self) -> &'static str;

    /// Replays the policy over `processes` until they are exhausted or the
    /// clock reaches `horizon`, reporting each decision to `sink`.
    fn run(&self, processes: &ProcessSet, horizon: i64, sink: &mut dyn TraceSink) -> RunStatistics;
}

/// Scheduling algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come-First-Served.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    #[serde(rename = "SJF")]
    Sjf,
    /// Round-Robin.
    #[serde(rename = "RR")]
    RoundRobin,
}

impl Algorithm {
    /// Canonical command-line name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::RoundRobin => "RR",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FCFS" => Ok(Algorithm::Fcfs),
            "SJF" => Ok(Algorithm::Sjf),
            "RR" => Ok(Algorithm::RoundRobin),
            other => Err(ConfigError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// A fully parameterised scheduling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Policy {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Round-Robin with a fixed quantum (ticks, >= 1).
    RoundRobin { time_slice: i64 },
}

impl Policy {
    /// Builds a policy from an algorithm and an optional quantum.
    ///
    /// The quantum is required for Round-Robin and ignored otherwise.
    pub fn new(algorithm: Algorithm, time_slice: Option<i64>) -> Result<Self, ConfigError> {
        match algorithm {
            Algorithm::Fcfs => Ok(Policy::Fcfs),
            Algorithm::Sjf => Ok(Policy::Sjf),
            Algorithm::RoundRobin => match time_slice {
                None => Err(ConfigError::MissingTimeSlice),
                Some(slice) if slice < 1 => Err(ConfigError::InvalidTimeSlice(slice)),
                Some(slice) => Ok(Policy::RoundRobin { time_slice: slice }),
            },
        }
    }

    /// The algorithm this policy runs.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Policy::Fcfs => Algorithm::Fcfs,
            Policy::Sjf => Algorithm::Sjf,
            Policy::RoundRobin { .. } => Algorithm::RoundRobin,
        }
    }

    /// Instantiates the scheduler for this policy.
    pub fn scheduler(&self) -> Box<dyn Scheduler> {
        match *self {
            Policy::Fcfs => Box::new(FcfsScheduler::new()),
            Policy::Sjf => Box::new(SjfScheduler::new()),
            Policy::RoundRobin { time_slice } => Box::new(RoundRobinScheduler::new(time_slice)),
        }
    }
}

/// A validated simulation: horizon plus policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Simulation {
    horizon: i64,
    policy: Policy,
}

impl Simulation {
    /// Creates a simulation.
    ///
    /// # Errors
    /// `ConfigError` if the horizon is below one tick or a Round-Robin
    /// quantum is below one tick.
    pub fn new(horizon: i64, policy: Policy) -> Result<Self, ConfigError> {
        if horizon < 1 {
            return Err(ConfigError::InvalidSimTime(horizon));
        }
        if let Policy::RoundRobin { time_slice } = policy {
            if time_slice < 1 {
                return Err(ConfigError::InvalidTimeSlice(time_slice));
            }
        }
        Ok(Self { horizon, policy })
    }

    /// Simulation horizon.
    pub fn horizon(&self) -> i64 {
        self.horizon
    }

    /// Configured policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Runs the policy, streaming events into `sink`.
    pub fn run(&self, processes: &ProcessSet, sink: &mut dyn TraceSink) -> RunReport {
        let scheduler = self.policy.scheduler();
        log::info!(
            "running {} over {} process(es), horizon {}",
            scheduler.name(),
            processes.len(),
            self.horizon
        );
        scheduler.run(processes, self.horizon, sink).finalize()
    }

    /// Runs the policy and returns the collected events with the report.
    pub fn run_collect(&self, processes: &ProcessSet) -> (Vec<SchedulingEvent>, RunReport) {
        let mut events = Vec::new();
        let report = self.run(processes, &mut events);
        (events, report)
    }
}
