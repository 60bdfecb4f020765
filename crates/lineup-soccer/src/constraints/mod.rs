//! Hard rules for game rosters.
//!
//! Rules that name players resolve them through a [`PlayerPool`] at
//! construction, so a misspelled name fails before any search starts.
//!
//! [`PlayerPool`]: crate::player::PlayerPool

pub mod distinct_players;
pub mod good_players;
pub mod playing_time;
pub mod position_variety;
pub mod unique_quarters;

#[cfg(test)]
mod tests;

pub use distinct_players::DistinctQuarterPlayersConstraint;
pub use good_players::MinimumGoodPlayersConstraint;
pub use playing_time::{PlayingTimeConstraint, DEFAULT_FORBIDDEN_PATTERNS};
pub use position_variety::PlayerPositionVarietyConstraint;
pub use unique_quarters::UniqueQuartersConstraint;
