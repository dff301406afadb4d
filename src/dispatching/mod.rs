//! Dispatching rules and rule engine for process selection.
//!
//! Provides priority-based dispatching rules (FIFO, SPT) and a composable
//! rule engine that picks the next process to run.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{DispatchContext, RuleEngine};
//! use u_cpusched::dispatching::rules;
//! use u_cpusched::models::ProcessSet;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Spt)
//!     .with_tie_breaker(rules::Fifo);
//!
//! let set = ProcessSet::from_triplets(&[1, 0, 5, 2, 0, 3]);
//! let candidates = set.arrival_order();
//! let best = engine.select_best(&candidates, &DispatchContext::at_time(0));
//! assert_eq!(best, Some(1));
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::DispatchContext;
pub use engine::RuleEngine;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = i64;

/// A dispatching rule that evaluates process priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for processes that should be dispatched first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT", "FIFO").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a process at the current clock.
    fn evaluate(&self, process: &Process, context: &DispatchContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
