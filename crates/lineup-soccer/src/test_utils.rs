//! Roster fixtures for soccer tests.

use crate::player::{Player, PlayerPool};
use crate::roster::{GameRoster, QuarterRoster, QUARTER_COUNT, QUARTER_SIZE};

/// The fourteen-player squad used throughout the tests.
pub const SQUAD: [&str; 14] = [
    "Asher", "Ransom", "Jacob", "Zeke", "Nolan", "Kylas", "Timothy", "Peter", "Aiden", "Owen",
    "Cyrus", "Marc", "Jude", "Elias",
];

/// The squad's stronger players.
pub const GOOD_PLAYERS: [&str; 5] = ["Jacob", "Zeke", "Nolan", "Kylas", "Ransom"];

/// Slots per quarter in goalie, defender x2, midfielder x2, forward x2 order.
///
/// Everyone plays quarters 1 and 3 or quarters 2 and 4, in two positions.
pub const BALANCED: [[&str; QUARTER_SIZE]; QUARTER_COUNT] = [
    ["Asher", "Ransom", "Jacob", "Zeke", "Timothy", "Peter", "Aiden"],
    ["Nolan", "Kylas", "Owen", "Cyrus", "Marc", "Jude", "Elias"],
    ["Peter", "Aiden", "Asher", "Ransom", "Jacob", "Zeke", "Timothy"],
    ["Jude", "Elias", "Nolan", "Kylas", "Owen", "Cyrus", "Marc"],
];

pub fn sample_pool() -> PlayerPool {
    PlayerPool::new(SQUAD).unwrap()
}

pub fn quarter(
    goalie: &str,
    defenders: [&str; 2],
    midfielders: [&str; 2],
    forwards: [&str; 2],
) -> QuarterRoster {
    QuarterRoster::new(
        Player::new(goalie),
        defenders.map(Player::new),
        midfielders.map(Player::new),
        forwards.map(Player::new),
    )
}

/// Builds a game from slot-ordered names, one row per quarter.
pub fn roster_from(slots: [[&str; QUARTER_SIZE]; QUARTER_COUNT]) -> GameRoster {
    GameRoster::new(slots.map(|s| quarter(s[0], [s[1], s[2]], [s[3], s[4]], [s[5], s[6]])))
}

pub fn balanced_roster() -> GameRoster {
    roster_from(BALANCED)
}
