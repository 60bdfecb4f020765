//! Test utilities for lineup-solver
//!
//! Builders wired with deterministic clocks and fixtures from lineup-test.

use std::time::Duration;

pub use lineup_test::{CountingConstraint, FnHeuristic, PredicateConstraint, SequenceGenerator};

use crate::clock::ManualClock;
use crate::picker::PickerBuilder;

/// Scores an integer candidate by its value.
pub fn value_score(v: &i64) -> f64 {
    *v as f64
}

/// A builder over a scripted sequence with a clock that ticks 1ms per read.
pub fn sequence_builder(values: impl Into<Vec<i64>>) -> PickerBuilder<SequenceGenerator> {
    PickerBuilder::new(SequenceGenerator::new(values))
        .with_clock(ManualClock::stepping(Duration::from_millis(1)))
        .with_seed(0)
}
