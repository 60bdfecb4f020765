//! Soccer game rosters for the lineup picker.
//!
//! A game is split into four quarters. Each quarter fields one goalie and
//! two players in each of defence, midfield and attack. This crate provides:
//! - the domain model ([`Player`], [`PlayerPool`], [`Position`],
//!   [`QuarterRoster`], [`GameRoster`])
//! - [`GameRosterGenerator`], which deals out random rosters
//! - the hard rules in [`constraints`]
//! - [`PositionPreferenceHeuristic`], which rewards preferred positions

pub mod constraints;
pub mod generator;
pub mod player;
pub mod position;
pub mod preference;
pub mod roster;

#[cfg(test)]
mod test_utils;

pub use constraints::{
    DistinctQuarterPlayersConstraint, MinimumGoodPlayersConstraint,
    PlayerPositionVarietyConstraint, PlayingTimeConstraint, UniqueQuartersConstraint,
};
pub use generator::GameRosterGenerator;
pub use player::{Player, PlayerPool};
pub use position::Position;
pub use preference::{PositionPreference, PositionPreferenceHeuristic};
pub use roster::{GameRoster, QuarterRoster, QUARTER_COUNT, QUARTER_SIZE};
