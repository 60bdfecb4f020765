//! Accepted-sample termination.

use super::Termination;
use crate::scope::SearchScope;

/// Terminates once enough candidates have been accepted.
///
/// # Example
///
/// ```
/// use lineup_solver::SampleCountTermination;
///
/// // Compare up to 30 accepted candidates
/// let term = SampleCountTermination::new(30);
/// assert_eq!(term.limit(), 30);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SampleCountTermination {
    limit: usize,
}

impl SampleCountTermination {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl<C> Termination<C> for SampleCountTermination {
    fn is_terminated(&self, scope: &SearchScope<'_, C>) -> bool {
        scope.accepted_count() >= self.limit
    }
}
