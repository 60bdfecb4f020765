//! Time-based termination.

use std::time::Duration;

use super::Termination;
use crate::scope::SearchScope;

/// Terminates after a time limit.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use lineup_solver::TimeTermination;
///
/// let term = TimeTermination::new(Duration::from_secs(10));
/// let term = TimeTermination::millis(500);
/// assert_eq!(term.limit(), Duration::from_millis(500));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TimeTermination {
    limit: Duration,
}

impl TimeTermination {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    pub fn millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }
}

impl<C> Termination<C> for TimeTermination {
    fn is_terminated(&self, scope: &SearchScope<'_, C>) -> bool {
        scope.elapsed() >= self.limit
    }
}
