//! Rule engine for multi-criteria dispatching.
//!
//! Chains a primary rule with tie-breakers. Once every rule ties, the
//! insertion sequence decides, so selection is always deterministic.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchContext, DispatchingRule, RuleScore};
use crate::models::{Process, SequencedProcess};

/// A composable rule engine for process selection.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::RuleEngine;
/// use u_cpusched::dispatching::rules;
///
/// let sjf = RuleEngine::new()
///     .with_rule(rules::Spt)
///     .with_tie_breaker(rules::Fifo);
/// assert_eq!(sjf.rule_names(), vec!["SPT", "FIFO"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine (pure insertion order).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds the primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted only when earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Evaluates a single process and returns scores from each rule.
    pub fn evaluate(&self, process: &Process, context: &DispatchContext) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|r| r.evaluate(process, context))
            .collect()
    }

    /// Returns the index of the highest-priority candidate.
    pub fn select_best(
        &self,
        candidates: &[SequencedProcess],
        context: &DispatchContext,
    ) -> Option<usize> {
        self.best_where(candidates, context, |_| true)
    }

    /// Returns the index of the highest-priority candidate that has arrived.
    ///
    /// `None` when no candidate arrived before `context.now`.
    pub fn select_arrived(
        &self,
        candidates: &[SequencedProcess],
        context: &DispatchContext,
    ) -> Option<usize> {
        self.best_where(candidates, context, |p| context.has_arrived(&p.process))
    }

    fn best_where<F>(
        &self,
        candidates: &[SequencedProcess],
        context: &DispatchContext,
        eligible: F,
    ) -> Option<usize>
    where
        F: Fn(&SequencedProcess) -> bool,
    {
        candidates
            .iter()
            .enumerate()
            .filter(|(_, p)| eligible(p))
            .min_by(|(_, a), (_, b)| self.compare(a, b, context))
            .map(|(i, _)| i)
    }

    fn compare(
        &self,
        a: &SequencedProcess,
        b: &SequencedProcess,
        context: &DispatchContext,
    ) -> Ordering {
        for rule in &self.rules {
            let ord = rule
                .evaluate(&a.process, context)
                .cmp(&rule.evaluate(&b.process, context));
            if ord != Ordering::Equal {
                return ord;
            }
        }

        // All rules tied → first inserted wins
        a.seq.cmp(&b.seq)
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;
    use crate::models::ProcessSet;

    fn sjf() -> RuleEngine {
        RuleEngine::new()
            .with_rule(rules::Spt)
            .with_tie_breaker(rules::Fifo)
    }

    #[test]
    fn test_spt_selection() {
        let set = ProcessSet::from_triplets(&[1, 0, 5, 2, 0, 1, 3, 0, 3]);
        let candidates = set.arrival_order();
        let best = sjf().select_best(&candidates, &DispatchContext::at_time(0));
        assert_eq!(candidates[best.unwrap()].process.id, 2);
    }

    #[test]
    fn test_tie_breaker_arrival_then_sequence() {
        // Same burst; id 3 arrived first, ids 1 and 2 tie on arrival.
        let set = ProcessSet::from_triplets(&[1, 2, 4, 2, 2, 4, 3, 1, 4]);
        let mut candidates = set.arrival_order();
        let ctx = DispatchContext::at_time(10);

        let best = sjf().select_best(&candidates, &ctx).unwrap();
        assert_eq!(candidates[best].process.id, 3);

        candidates.remove(best);
        let best = sjf().select_best(&candidates, &ctx).unwrap();
        assert_eq!(candidates[best].process.id, 1);
    }

    #[test]
    fn test_select_arrived_skips_future() {
        // id 2 is shorter but has not arrived at t=3
        let set = ProcessSet::from_triplets(&[1, 0, 8, 2, 5, 1]);
        let candidates = set.arrival_order();
        let best = sjf()
            .select_arrived(&candidates, &DispatchContext::at_time(3))
            .unwrap();
        assert_eq!(candidates[best].process.id, 1);
    }

    #[test]
    fn test_select_arrived_none() {
        // Arrival is strict: nothing has arrived at t=0
        let set = ProcessSet::from_triplets(&[1, 0, 8, 2, 5, 1]);
        let candidates = set.arrival_order();
        assert!(sjf()
            .select_arrived(&candidates, &DispatchContext::at_time(0))
            .is_none());
    }

    #[test]
    fn test_empty_candidates() {
        let ctx = DispatchContext::at_time(0);
        assert!(sjf().select_best(&[], &ctx).is_none());
        assert!(sjf().select_arrived(&[], &ctx).is_none());
    }

    #[test]
    fn test_no_rules_is_insertion_order() {
        let set = ProcessSet::from_triplets(&[1, 3, 8, 2, 0, 1]);
        let candidates = set.arrival_order();
        // arrival_order puts id 2 (seq 1) first; with no rules, seq 0 wins
        let best = RuleEngine::new()
            .select_best(&candidates, &DispatchContext::at_time(0))
            .unwrap();
        assert_eq!(candidates[best].process.id, 1);
    }

    #[test]
    fn test_evaluate_scores() {
        let scores = sjf().evaluate(&Process::new(1, 4, 9), &DispatchContext::at_time(0));
        assert_eq!(scores, vec![9, 4]);
    }
}
