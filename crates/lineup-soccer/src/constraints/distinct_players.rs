use lineup_core::Constraint;

use crate::roster::GameRoster;

/// Rejects games where one player fills two slots of the same quarter.
///
/// Only pools smaller than fourteen can produce such games.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistinctQuarterPlayersConstraint;

impl Constraint<GameRoster> for DistinctQuarterPlayersConstraint {
    fn is_met(&self, roster: &GameRoster) -> bool {
        roster.quarters().iter().all(|q| !q.has_duplicate_players())
    }

    fn name(&self) -> &str {
        "distinct_quarter_players"
    }
}
