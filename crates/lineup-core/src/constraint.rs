//! Hard constraints.

/// A yes/no rule a candidate must satisfy to be eligible at all.
///
/// Implementations must be pure: calling `is_met` twice on the same
/// candidate gives the same answer, and nothing is mutated. The picker calls
/// it once per generated candidate, so it should be cheap.
///
/// # Example
///
/// ```
/// use lineup_core::Constraint;
///
/// struct Even;
///
/// impl Constraint<u32> for Even {
///     fn is_met(&self, candidate: &u32) -> bool {
///         candidate % 2 == 0
///     }
/// }
///
/// assert!(Even.is_met(&4));
/// assert!(!Even.is_met(&5));
/// ```
pub trait Constraint<C> {
    /// Returns true if the candidate satisfies this rule.
    fn is_met(&self, candidate: &C) -> bool;

    /// Name used in log output.
    fn name(&self) -> &str {
        short_type_name(std::any::type_name::<Self>())
    }

    /// Called once for each candidate the picker accepts, after every
    /// constraint has passed it.
    fn on_accepted(&self, _candidate: &C) {}
}

/// Returns the first constraint, in order, that rejects the candidate.
pub fn first_violated<'a, C>(
    constraints: &'a [Box<dyn Constraint<C>>],
    candidate: &C,
) -> Option<&'a dyn Constraint<C>> {
    constraints
        .iter()
        .find(|c| !c.is_met(candidate))
        .map(|c| c.as_ref())
}

/// Returns true if every constraint accepts the candidate.
///
/// Stops at the first rejection. An empty set accepts everything.
pub fn all_met<C>(constraints: &[Box<dyn Constraint<C>>], candidate: &C) -> bool {
    first_violated(constraints, candidate).is_none()
}

// Strips the module path and generic arguments from a type name.
pub(crate) fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
