use std::sync::Arc;

use lineup_core::Constraint;

use crate::roster::GameRoster;

/// Rejects games that hold the same quarter instance in two slots.
///
/// Compares handles, not contents: two equal quarters built separately pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniqueQuartersConstraint;

impl Constraint<GameRoster> for UniqueQuartersConstraint {
    fn is_met(&self, roster: &GameRoster) -> bool {
        let quarters = roster.quarters();
        quarters.iter().enumerate().all(|(i, q)| {
            quarters[i + 1..]
                .iter()
                .all(|other| !Arc::ptr_eq(q, other))
        })
    }

    fn name(&self) -> &str {
        "unique_quarters"
    }
}
