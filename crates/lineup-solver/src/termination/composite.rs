//! Composite termination (OR).
//!
//! Uses macro-generated tuple implementations.

use super::Termination;
use crate::scope::SearchScope;

/// Combines multiple terminations with OR logic (any must terminate).
///
/// # Examples
///
/// ```
/// use lineup_solver::{OrTermination, SampleCountTermination, TimeTermination};
///
/// // Stop after 30 accepted candidates OR 10 seconds
/// let termination = OrTermination((
///     SampleCountTermination::new(30),
///     TimeTermination::millis(10_000),
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct OrTermination<T>(pub T);

impl<T> OrTermination<T> {
    /// Creates a new OR termination from a tuple of terminations.
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

/// Generates `Termination` implementations for OR tuples.
macro_rules! impl_or_termination {
    ($($idx:tt: $T:ident),+) => {
        impl<C, $($T),+> Termination<C> for OrTermination<($($T,)+)>
        where
            $($T: Termination<C>,)+
        {
            fn is_terminated(&self, scope: &SearchScope<'_, C>) -> bool {
                $((self.0).$idx.is_terminated(scope))||+
            }
        }
    };
}

impl_or_termination!(0: T0);
impl_or_termination!(0: T0, 1: T1);
impl_or_termination!(0: T0, 1: T1, 2: T2);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3);
