//! Per-search state.

use std::time::{Duration, Instant};

use crate::clock::Clock;

/// State owned by a single `pick()` call.
///
/// Holds the candidates accepted so far and the counters terminations look
/// at. Nothing here outlives the call that created it.
#[derive(Debug)]
pub struct SearchScope<'a, C> {
    clock: &'a dyn Clock,
    start_time: Instant,
    accepted: Vec<C>,
    generated_count: u64,
}

impl<'a, C> SearchScope<'a, C> {
    /// Starts a new search, reading the start time from `clock`.
    pub fn new(clock: &'a dyn Clock) -> Self {
        Self {
            start_time: clock.now(),
            clock,
            accepted: Vec::new(),
            generated_count: 0,
        }
    }

    /// Time since the search started, as reported by the clock.
    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_duration_since(self.start_time)
    }

    pub fn start_time(&self) -> Instant {
        self.start_time
    }

    /// Records one generated candidate and returns the new total.
    pub fn increment_generated_count(&mut self) -> u64 {
        self.generated_count += 1;
        self.generated_count
    }

    pub fn generated_count(&self) -> u64 {
        self.generated_count
    }

    /// Retains an accepted candidate and returns its 1-based index.
    pub fn accept(&mut self, candidate: C) -> usize {
        self.accepted.push(candidate);
        self.accepted.len()
    }

    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    pub fn accepted(&self) -> &[C] {
        &self.accepted
    }

    /// Consumes the scope, returning the accepted candidates in order.
    pub fn into_accepted(self) -> Vec<C> {
        self.accepted
    }
}
