//! Integer generators.

use std::cell::Cell;
use std::ops::Range;

use lineup_core::Generator;
use rand::Rng;

/// Yields a fixed script of values, cycling when it runs out.
///
/// Ignores the rng entirely, so tests know exactly which candidate comes
/// next.
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    values: Vec<i64>,
    next: Cell<usize>,
    calls: Cell<usize>,
}

impl SequenceGenerator {
    /// Creates a generator over `values`.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(values: impl Into<Vec<i64>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "SequenceGenerator needs at least one value");
        Self {
            values,
            next: Cell::new(0),
            calls: Cell::new(0),
        }
    }

    /// Number of times `generate` has been called.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Generator for SequenceGenerator {
    type Candidate = i64;

    fn generate<R: Rng + ?Sized>(&self, _rng: &mut R) -> i64 {
        let index = self.next.get();
        self.next.set((index + 1) % self.values.len());
        self.calls.set(self.calls.get() + 1);
        self.values[index]
    }
}

/// Draws integers uniformly from a range.
#[derive(Debug, Clone)]
pub struct RandomIntGenerator {
    range: Range<i64>,
}

impl RandomIntGenerator {
    pub fn new(range: Range<i64>) -> Self {
        Self { range }
    }
}

impl Generator for RandomIntGenerator {
    type Candidate = i64;

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        rng.random_range(self.range.clone())
    }
}
