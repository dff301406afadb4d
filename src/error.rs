//! Error types.
//!
//! Horizon truncation is not an error: it is reported through
//! `RunReport::remaining_tasks`. Only bad arguments, unreadable input and
//! invalid process records surface here.

use thiserror::Error;

use crate::validation::ValidationError;

/// Failure reading the process definition stream.
#[derive(Debug, Error)]
pub enum InputError {
    /// The underlying reader failed.
    #[error("failed to read process input: {0}")]
    Io(#[from] std::io::Error),
}

/// Invalid simulation arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Simulation horizon below one tick.
    #[error("sim_time cannot be less than 1")]
    InvalidSimTime(i64),
    /// Round-Robin requested without a quantum.
    #[error("must provide time slice with RR algorithm type")]
    MissingTimeSlice,
    /// Quantum below one tick.
    #[error("time_slice cannot be less than 1")]
    InvalidTimeSlice(i64),
    /// Algorithm name not in {FCFS, SJF, RR}.
    #[error("unrecognized algorithm type")]
    UnknownAlgorithm(String),
}

/// Top-level error for a simulation invocation.
#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("invalid process input: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    #[error("failed to encode report: {0}")]
    Report(#[from] serde_json::Error),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<Vec<ValidationError>> for SimError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SimError::Validation(errors)
    }
}
