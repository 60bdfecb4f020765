//! Termination conditions for the search loop.

mod composite;
mod sample_count;
mod time;

use crate::scope::SearchScope;

pub use composite::OrTermination;
pub use sample_count::SampleCountTermination;
pub use time::TimeTermination;

/// Trait for determining when to stop generating candidates.
///
/// Checked at the top of every loop iteration, before a candidate is
/// generated.
pub trait Termination<C> {
    /// Returns true if the search should stop.
    fn is_terminated(&self, scope: &SearchScope<'_, C>) -> bool;
}
