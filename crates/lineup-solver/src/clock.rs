//! Wall clocks used to measure the search budget.

use std::cell::Cell;
use std::fmt::Debug;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of the current time.
///
/// The picker samples the clock once at the start of a search and once at
/// the top of every loop iteration.
pub trait Clock: Debug {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// Reads the monotonic system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle and hand
/// another to the picker. With [`ManualClock::stepping`] every reading
/// advances the clock by a fixed amount, which models a generator that takes
/// a known time per call.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use lineup_solver::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let start = clock.now();
/// clock.advance(Duration::from_millis(250));
/// assert_eq!(clock.now() - start, Duration::from_millis(250));
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    offset: Rc<Cell<Duration>>,
    step: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::stepping(Duration::ZERO)
    }

    /// Creates a clock that advances by `step` after every reading.
    pub fn stepping(step: Duration) -> Self {
        Self {
            origin: Instant::now(),
            offset: Rc::new(Cell::new(Duration::ZERO)),
            step,
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }

    /// Time elapsed since the clock was created.
    pub fn offset(&self) -> Duration {
        self.offset.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        let now = self.origin + self.offset.get();
        self.advance(self.step);
        now
    }
}
