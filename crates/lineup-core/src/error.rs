//! Error types for lineup

use thiserror::Error;

/// Main error type for lineup operations.
///
/// Every variant describes a configuration problem detected while building
/// a generator, a rule, or a picker. Failing to find a candidate during
/// search is not an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineupError {
    /// Error in picker or search configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A rule references a player missing from the pool
    #[error("Unknown player: {0}")]
    UnknownPlayer(String),

    /// The same player name was supplied twice
    #[error("Duplicate player: {0}")]
    DuplicatePlayer(String),

    /// The player pool is empty
    #[error("Player pool is empty")]
    EmptyPool,

    /// Not enough players to staff one segment
    #[error("Player pool too small: need at least {required} players, got {actual}")]
    PoolTooSmall { required: usize, actual: usize },

    /// A rule was built with unusable parameters
    #[error("Invalid rule: {0}")]
    InvalidRule(String),
}

/// Result type alias for lineup operations
pub type Result<T> = std::result::Result<T, LineupError>;
