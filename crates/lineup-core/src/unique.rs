//! Rejecting candidates that were already chosen.

use std::cell::RefCell;
use std::fmt::{self, Debug};

use crate::constraint::Constraint;

/// Rejects any candidate equal to one chosen before.
///
/// Every accepted candidate is remembered, so the history spans `pick()`
/// calls on the same picker. Earlier results can be supplied up front with
/// [`UniqueConstraint::with_past_choices`].
///
/// # Example
///
/// ```
/// use lineup_core::{Constraint, UniqueConstraint};
///
/// let unique = UniqueConstraint::new().with_past_choices([3]);
/// assert!(!unique.is_met(&3));
/// assert!(unique.is_met(&4));
///
/// unique.on_accepted(&4);
/// assert!(!unique.is_met(&4));
/// ```
pub struct UniqueConstraint<C> {
    past_choices: RefCell<Vec<C>>,
}

impl<C> UniqueConstraint<C> {
    pub fn new() -> Self {
        Self {
            past_choices: RefCell::new(Vec::new()),
        }
    }

    /// Adds candidates that count as already chosen.
    pub fn with_past_choices(self, choices: impl IntoIterator<Item = C>) -> Self {
        self.past_choices.borrow_mut().extend(choices);
        self
    }

    pub fn past_choice_count(&self) -> usize {
        self.past_choices.borrow().len()
    }

    /// Forgets every remembered choice.
    pub fn clear(&self) {
        self.past_choices.borrow_mut().clear();
    }
}

impl<C> Default for UniqueConstraint<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Debug for UniqueConstraint<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniqueConstraint")
            .field("past_choices", &self.past_choice_count())
            .finish()
    }
}

impl<C: PartialEq + Clone> Constraint<C> for UniqueConstraint<C> {
    fn is_met(&self, candidate: &C) -> bool {
        !self.past_choices.borrow().contains(candidate)
    }

    fn name(&self) -> &str {
        "unique"
    }

    fn on_accepted(&self, candidate: &C) {
        self.past_choices.borrow_mut().push(candidate.clone());
    }
}
