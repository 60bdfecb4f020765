use lineup_core::{Constraint, Result};

use crate::player::{Player, PlayerPool};
use crate::roster::GameRoster;

/// Every tracked player must play at least `minimum_positions` distinct
/// positions over the game.
#[derive(Debug, Clone)]
pub struct PlayerPositionVarietyConstraint {
    players: Vec<Player>,
    minimum_positions: usize,
}

impl PlayerPositionVarietyConstraint {
    pub fn new<I, S>(pool: &PlayerPool, players: I, minimum_positions: usize) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            players: pool.resolve(players)?,
            minimum_positions,
        })
    }

    pub fn minimum_positions(&self) -> usize {
        self.minimum_positions
    }

    fn positions_played(&self, roster: &GameRoster, player: &Player) -> u32 {
        let mask = roster
            .quarters()
            .iter()
            .flat_map(|q| q.assignments())
            .filter(|(p, _)| *p == player)
            .fold(0u8, |mask, (_, position)| mask | position.bit());
        mask.count_ones()
    }
}

impl Constraint<GameRoster> for PlayerPositionVarietyConstraint {
    fn is_met(&self, roster: &GameRoster) -> bool {
        self.players
            .iter()
            .all(|p| self.positions_played(roster, p) as usize >= self.minimum_positions)
    }

    fn name(&self) -> &str {
        "position_variety"
    }
}
