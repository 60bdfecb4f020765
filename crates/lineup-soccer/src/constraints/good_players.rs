use std::collections::BTreeSet;

use lineup_core::{Constraint, Result};

use crate::player::{Player, PlayerPool};
use crate::roster::GameRoster;

/// Every quarter must field at least `minimum` of the listed players.
///
/// `minimum` is not checked against the list size; an unreachable minimum
/// simply rejects every game.
#[derive(Debug, Clone)]
pub struct MinimumGoodPlayersConstraint {
    good_players: BTreeSet<Player>,
    minimum: usize,
}

impl MinimumGoodPlayersConstraint {
    pub fn new<I, S>(pool: &PlayerPool, good_players: I, minimum: usize) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let good_players = pool.resolve(good_players)?.into_iter().collect();
        Ok(Self {
            good_players,
            minimum,
        })
    }

    pub fn good_players(&self) -> &BTreeSet<Player> {
        &self.good_players
    }

    pub fn minimum(&self) -> usize {
        self.minimum
    }
}

impl Constraint<GameRoster> for MinimumGoodPlayersConstraint {
    fn is_met(&self, roster: &GameRoster) -> bool {
        roster.quarters().iter().all(|quarter| {
            quarter
                .players()
                .into_iter()
                .filter(|p| self.good_players.contains(*p))
                .count()
                >= self.minimum
        })
    }

    fn name(&self) -> &str {
        "minimum_good_players"
    }
}
