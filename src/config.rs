//! Simulation configuration.
//!
//! Raw run parameters as they arrive from the command line (or any other
//! front end), validated into a [`Simulation`] before the engine starts.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::scheduler::{Algorithm, Policy, Simulation};

/// Unvalidated run parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Simulation horizon (ticks).
    pub sim_time: i64,
    /// Algorithm name: "FCFS", "SJF" or "RR".
    pub algorithm: String,
    /// Round-Robin quantum.
    #[serde(default)]
    pub time_slice: Option<i64>,
}

impl SimulationConfig {
    /// Creates a configuration.
    pub fn new(sim_time: i64, algorithm: impl Into<String>) -> Self {
        Self {
            sim_time,
            algorithm: algorithm.into(),
            time_slice: None,
        }
    }

    /// Sets the Round-Robin quantum.
    pub fn with_time_slice(mut self, time_slice: i64) -> Self {
        self.time_slice = Some(time_slice);
        self
    }

    /// Validates the parameters.
    ///
    /// Checks run in a fixed order so the first failing one is reported:
    /// horizon, algorithm name, quantum presence, quantum value.
    pub fn validate(&self) -> Result<Simulation, ConfigError> {
        if self.sim_time < 1 {
            return Err(ConfigError::InvalidSimTime(self.sim_time));
        }
        let algorithm: Algorithm = self.algorithm.parse()?;

        if let Some(slice) = self.time_slice {
            if slice < 1 {
                return Err(ConfigError::InvalidTimeSlice(slice));
            }
            if algorithm != Algorithm::RoundRobin {
                log::warn!("time slice {slice} ignored by {algorithm}");
            }
        }

        let policy = Policy::new(algorithm, self.time_slice)?;
        Simulation::new(self.sim_time, policy)
    }
}
