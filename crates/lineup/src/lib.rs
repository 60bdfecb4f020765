//! Lineup - a soccer lineup picker
//!
//! Describe the squad, the rules and everyone's position preferences in a
//! [`LineupConfig`], then let the picker search random games for the best
//! one that breaks no rule.
//!
//! # Example
//!
//! ```rust,no_run
//! use lineup::prelude::*;
//!
//! let config = LineupConfig::load("lineup.toml")?;
//! let mut picker = lineup::build_picker(&config)?;
//! match picker.pick().into_candidate() {
//!     Some(roster) => print!("{}", roster),
//!     None => println!("No roster found"),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use lineup_config::{
    ConfigError, GoodPlayersConfig, LineupConfig, PlayingTimeConfig, PositionVarietyConfig,
    RulesConfig, SearchConfig,
};
pub use lineup_core::{Constraint, Generator, Heuristic, LineupError, Result, UniqueConstraint};
pub use lineup_soccer::{
    GameRoster, GameRosterGenerator, Player, PlayerPool, Position, PositionPreference,
    PositionPreferenceHeuristic, QuarterRoster,
};
pub use lineup_solver::{PickOutcome, PickStatistics, Picker, PickerBuilder, Selection};

#[cfg(feature = "console")]
pub use lineup_console as console;

mod builder;
mod sample;

pub use builder::{build_constraints, build_picker, picker_builder};
pub use sample::sample_config;

pub mod prelude {
    pub use super::{
        GameRoster, LineupConfig, LineupError, PickOutcome, Picker, Position, PositionPreference,
    };
}
