//! Field positions.

use std::fmt::{self, Display};
use std::str::FromStr;

use lineup_core::LineupError;
use serde::{Deserialize, Serialize};

/// A role a player fills within one quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Goalie,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    /// All positions in slot order.
    pub const ALL: [Position; 4] = [
        Position::Goalie,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Goalie => "goalie",
            Position::Defender => "defender",
            Position::Midfielder => "midfielder",
            Position::Forward => "forward",
        }
    }

    // One bit per position.
    pub(crate) fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = LineupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| LineupError::InvalidRule(format!("unknown position '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        for position in Position::ALL {
            assert_eq!(position.to_string().parse::<Position>(), Ok(position));
        }
        assert_eq!("Goalie".parse::<Position>(), Ok(Position::Goalie));
        assert!("sweeper".parse::<Position>().is_err());
    }

    #[test]
    fn test_bits_are_distinct() {
        let all = Position::ALL.iter().fold(0u8, |acc, p| acc | p.bit());
        assert_eq!(all.count_ones(), 4);
    }
}
