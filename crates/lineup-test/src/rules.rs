//! Closure-backed rules.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use lineup_core::{Constraint, Heuristic};

/// A constraint defined by a closure.
pub struct PredicateConstraint<C, F> {
    name: String,
    predicate: F,
    _phantom: PhantomData<fn(&C)>,
}

impl<C, F> PredicateConstraint<C, F>
where
    F: Fn(&C) -> bool,
{
    pub fn new(name: impl Into<String>, predicate: F) -> Self {
        Self {
            name: name.into(),
            predicate,
            _phantom: PhantomData,
        }
    }
}

impl<C, F> Constraint<C> for PredicateConstraint<C, F>
where
    F: Fn(&C) -> bool,
{
    fn is_met(&self, candidate: &C) -> bool {
        (self.predicate)(candidate)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A constraint that always gives the same answer and counts its calls.
///
/// Clones share the counter.
#[derive(Debug, Clone)]
pub struct CountingConstraint {
    result: bool,
    calls: Arc<AtomicUsize>,
}

impl CountingConstraint {
    pub fn new(result: bool) -> Self {
        Self {
            result,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<C> Constraint<C> for CountingConstraint {
    fn is_met(&self, _candidate: &C) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result
    }
}

/// A heuristic defined by a closure.
pub struct FnHeuristic<C, F> {
    name: String,
    score: F,
    _phantom: PhantomData<fn(&C)>,
}

impl<C, F> FnHeuristic<C, F>
where
    F: Fn(&C) -> f64,
{
    pub fn new(name: impl Into<String>, score: F) -> Self {
        Self {
            name: name.into(),
            score,
            _phantom: PhantomData,
        }
    }
}

impl<C, F> Heuristic<C> for FnHeuristic<C, F>
where
    F: Fn(&C) -> f64,
{
    fn calc_score(&self, candidate: &C) -> f64 {
        (self.score)(candidate)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
