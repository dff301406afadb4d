//! Simulation domain models.
//!
//! Provides the input data types for a CPU scheduling run.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Immutable input record (id, arrival, burst) |
//! | `ProcessSet` | Ordered process collection parsed from the input stream |
//! | `SimulationClock` | Non-decreasing simulated time |

mod clock;
mod process;

pub use clock::SimulationClock;
pub use process::{Process, ProcessSet, SequencedProcess};
