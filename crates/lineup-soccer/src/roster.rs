//! Quarter and game rosters.

use std::collections::BTreeSet;
use std::fmt::{self, Display};
use std::sync::Arc;

use crate::player::Player;
use crate::position::Position;

/// Number of quarters in a game.
pub const QUARTER_COUNT: usize = 4;

/// Players on the field in one quarter: a goalie and two of each outfield line.
pub const QUARTER_SIZE: usize = 7;

/// Who plays where during one quarter.
///
/// Role groups are fixed-size, so a quarter always has exactly one goalie
/// and two defenders, midfielders and forwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuarterRoster {
    goalie: Player,
    defenders: [Player; 2],
    midfielders: [Player; 2],
    forwards: [Player; 2],
}

impl QuarterRoster {
    pub fn new(
        goalie: Player,
        defenders: [Player; 2],
        midfielders: [Player; 2],
        forwards: [Player; 2],
    ) -> Self {
        Self {
            goalie,
            defenders,
            midfielders,
            forwards,
        }
    }

    pub fn goalie(&self) -> &Player {
        &self.goalie
    }

    pub fn defenders(&self) -> &[Player; 2] {
        &self.defenders
    }

    pub fn midfielders(&self) -> &[Player; 2] {
        &self.midfielders
    }

    pub fn forwards(&self) -> &[Player; 2] {
        &self.forwards
    }

    /// Every (player, position) slot, goalie first.
    pub fn assignments(&self) -> impl Iterator<Item = (&Player, Position)> + '_ {
        std::iter::once((&self.goalie, Position::Goalie))
            .chain(self.defenders.iter().map(|p| (p, Position::Defender)))
            .chain(self.midfielders.iter().map(|p| (p, Position::Midfielder)))
            .chain(self.forwards.iter().map(|p| (p, Position::Forward)))
    }

    /// Distinct players on the field.
    pub fn players(&self) -> BTreeSet<&Player> {
        self.assignments().map(|(p, _)| p).collect()
    }

    pub fn contains(&self, player: &Player) -> bool {
        self.assignments().any(|(p, _)| p == player)
    }

    /// The first position the player fills, if they play this quarter.
    pub fn position_of(&self, player: &Player) -> Option<Position> {
        self.assignments()
            .find(|(p, _)| *p == player)
            .map(|(_, position)| position)
    }

    /// True if one player fills more than one slot.
    pub fn has_duplicate_players(&self) -> bool {
        self.players().len() < QUARTER_SIZE
    }
}

impl Display for QuarterRoster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "      {}", self.goalie)?;
        for line in [&self.defenders, &self.midfielders, &self.forwards] {
            writeln!(f, "{}     {}", line[0], line[1])?;
        }
        Ok(())
    }
}

/// A full game: one roster per quarter, in playing order.
///
/// Quarters are shared behind `Arc` and never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameRoster {
    quarters: [Arc<QuarterRoster>; QUARTER_COUNT],
}

impl GameRoster {
    pub fn new(quarters: [QuarterRoster; QUARTER_COUNT]) -> Self {
        Self {
            quarters: quarters.map(Arc::new),
        }
    }

    /// Builds a game from existing quarter handles.
    ///
    /// The same handle may appear twice; `UniqueQuartersConstraint` rejects
    /// such games.
    pub fn from_shared(quarters: [Arc<QuarterRoster>; QUARTER_COUNT]) -> Self {
        Self { quarters }
    }

    pub fn quarters(&self) -> &[Arc<QuarterRoster>; QUARTER_COUNT] {
        &self.quarters
    }

    /// Returns the quarter at a 0-based index.
    pub fn quarter(&self, index: usize) -> Option<&QuarterRoster> {
        self.quarters.get(index).map(Arc::as_ref)
    }

    /// Every player who plays at least one quarter.
    pub fn players(&self) -> BTreeSet<&Player> {
        self.quarters.iter().flat_map(|q| q.players()).collect()
    }

    /// 1-based numbers of the quarters the player appears in.
    pub fn quarters_played(&self, player: &Player) -> impl Iterator<Item = usize> + '_ {
        let player = player.clone();
        self.quarters
            .iter()
            .enumerate()
            .filter(move |(_, q)| q.contains(&player))
            .map(|(i, _)| i + 1)
    }
}

impl Display for GameRoster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, quarter) in self.quarters.iter().enumerate() {
            writeln!(f, "====== Q{} =====", i + 1)?;
            write!(f, "{}", quarter)?;
        }
        Ok(())
    }
}
