//! Discrete-time CPU scheduling simulator.
//!
//! Replays First-Come-First-Served, non-preemptive Shortest-Job-First or
//! Round-Robin over a set of processes within a bounded horizon, and reports
//! throughput, wait time and turnaround statistics.
//!
//! # Modules
//!
//! - **`models`**: `Process`, `ProcessSet` (input parsing), `SimulationClock`
//! - **`dispatching`**: Selection rules (SPT, FIFO) and the rule engine
//! - **`scheduler`**: The three policies, scheduling events, run statistics
//! - **`validation`**: Process record checks (duplicate IDs, bad times)
//! - **`config`**: Run parameters validated into a `Simulation`
//!
//! # Example
//!
//! ```
//! use u_cpusched::config::SimulationConfig;
//! use u_cpusched::models::ProcessSet;
//!
//! let sim = SimulationConfig::new(3, "RR").with_time_slice(2).validate().unwrap();
//! let (_, report) = sim.run_collect(&ProcessSet::parse("1 0 5"));
//! assert_eq!(report.time_passed, 3);
//! assert_eq!(report.remaining_tasks, 1);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{ConfigError, InputError, SimError};
