//! Position preferences and the heuristic that rewards them.

use std::collections::{BTreeMap, BTreeSet};

use lineup_core::{Heuristic, Result};
use serde::{Deserialize, Serialize};

use crate::player::{Player, PlayerPool};
use crate::position::Position;
use crate::roster::{GameRoster, QuarterRoster};

/// Signed weights a player gives to positions. Unlisted positions weigh 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PositionPreference {
    weights: BTreeMap<Position, f64>,
}

impl PositionPreference {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, position: Position, weight: f64) -> Self {
        self.weights.insert(position, weight);
        self
    }

    pub fn score(&self, position: Position) -> f64 {
        self.weights.get(&position).copied().unwrap_or(0.0)
    }

    pub fn weights(&self) -> &BTreeMap<Position, f64> {
        &self.weights
    }
}

impl FromIterator<(Position, f64)> for PositionPreference {
    fn from_iter<I: IntoIterator<Item = (Position, f64)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}

/// Scores a game by how well positions match player preferences.
///
/// Each quarter contributes the weight of every distinct (player, position)
/// pair it contains; a player without preferences contributes nothing.
#[derive(Debug, Clone, Default)]
pub struct PositionPreferenceHeuristic {
    preferences: BTreeMap<Player, PositionPreference>,
}

impl PositionPreferenceHeuristic {
    /// Fails if a preference names a player outside the pool. A player listed
    /// twice keeps the last table.
    pub fn new<I, S>(pool: &PlayerPool, preferences: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, PositionPreference)>,
        S: AsRef<str>,
    {
        let mut resolved = BTreeMap::new();
        for (name, preference) in preferences {
            resolved.insert(pool.require(name.as_ref())?, preference);
        }
        Ok(Self {
            preferences: resolved,
        })
    }

    pub fn preference(&self, player: &Player) -> Option<&PositionPreference> {
        self.preferences.get(player)
    }

    fn quarter_score(&self, quarter: &QuarterRoster) -> f64 {
        let pairs: BTreeSet<(&Player, Position)> = quarter.assignments().collect();
        pairs
            .into_iter()
            .filter_map(|(player, position)| {
                self.preferences.get(player).map(|pref| pref.score(position))
            })
            .sum()
    }
}

impl Heuristic<GameRoster> for PositionPreferenceHeuristic {
    fn calc_score(&self, roster: &GameRoster) -> f64 {
        roster
            .quarters()
            .iter()
            .map(|q| self.quarter_score(q))
            .sum()
    }

    fn name(&self) -> &str {
        "position_preference"
    }
}
