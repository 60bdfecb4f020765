//! Configuration for the lineup picker.
//!
//! A config names the squad, the search budget, which rules apply and each
//! player's position preferences. It loads from TOML or YAML.
//!
//! # Examples
//!
//! ```
//! use lineup_config::LineupConfig;
//! use std::time::Duration;
//!
//! let config = LineupConfig::from_toml_str(r#"
//!     players = ["Asher", "Ransom", "Jacob", "Zeke", "Nolan", "Kylas", "Timothy"]
//!
//!     [search]
//!     sample_size = 30
//!     time_limit_millis = 2000
//!
//!     [rules.playing_time]
//!     minimum_quarters = 2
//!
//!     [preferences.Timothy]
//!     goalie = 5
//! "#).unwrap();
//!
//! assert_eq!(config.players.len(), 7);
//! assert_eq!(config.time_limit(), Some(Duration::from_millis(2000)));
//! assert!(config.rules.unique_quarters);
//! config.validate().unwrap();
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use lineup_core::LineupError;
use lineup_soccer::PositionPreference;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for LineupError {
    fn from(err: ConfigError) -> Self {
        LineupError::Config(err.to_string())
    }
}

/// Full description of one lineup problem.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LineupConfig {
    /// Squad names, in pool order.
    pub players: Vec<String>,

    /// Search budget.
    #[serde(default)]
    pub search: SearchConfig,

    /// Which rules apply.
    #[serde(default)]
    pub rules: RulesConfig,

    /// Position weights per player name.
    #[serde(default)]
    pub preferences: BTreeMap<String, PositionPreference>,
}

impl LineupConfig {
    /// Creates a config for the given squad with default rules.
    pub fn new<I, S>(players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            players: players.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Loads a config file, choosing YAML for `.yaml`/`.yml` and TOML otherwise.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Checks what can be checked without building a player pool.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for an empty squad, a zero sample
    /// size or a zero time limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.is_empty() {
            return Err(ConfigError::Invalid("no players listed".to_string()));
        }
        if self.search.sample_size == Some(0) {
            return Err(ConfigError::Invalid(
                "search.sample_size must be at least 1".to_string(),
            ));
        }
        if self.search.time_limit_millis == Some(0) {
            return Err(ConfigError::Invalid(
                "search.time_limit_millis must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the number of accepted rosters to compare.
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.search.sample_size = Some(sample_size);
        self
    }

    /// Sets the search time limit.
    pub fn with_time_limit_millis(mut self, millis: u64) -> Self {
        self.search.time_limit_millis = Some(millis);
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.search.random_seed = Some(seed);
        self
    }

    /// Adds or replaces a player's position preference.
    pub fn with_preference(
        mut self,
        player: impl Into<String>,
        preference: PositionPreference,
    ) -> Self {
        self.preferences.insert(player.into(), preference);
        self
    }

    /// Returns the search time limit, if configured.
    pub fn time_limit(&self) -> Option<Duration> {
        self.search.time_limit_millis.map(Duration::from_millis)
    }
}

/// Search budget. Unset fields fall back to the picker defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// Accepted rosters to compare.
    #[serde(default)]
    pub sample_size: Option<usize>,

    /// Wall-clock budget in milliseconds.
    #[serde(default)]
    pub time_limit_millis: Option<u64>,

    /// Seed for reproducible searches.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

/// Rule selection.
///
/// Structural rules are on unless switched off. Rules with parameters apply
/// only when their table is present.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RulesConfig {
    #[serde(default)]
    pub minimum_good_players: Option<GoodPlayersConfig>,

    #[serde(default = "enabled")]
    pub unique_quarters: bool,

    #[serde(default = "enabled")]
    pub distinct_quarter_players: bool,

    /// Rejects a game roster equal to one already accepted.
    #[serde(default)]
    pub unique_games: bool,

    #[serde(default)]
    pub playing_time: Option<PlayingTimeConfig>,

    #[serde(default)]
    pub position_variety: Option<PositionVarietyConfig>,
}

fn enabled() -> bool {
    true
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            minimum_good_players: None,
            unique_quarters: true,
            distinct_quarter_players: true,
            unique_games: false,
            playing_time: None,
            position_variety: None,
        }
    }
}

/// Every quarter fields at least `minimum` of `players`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct GoodPlayersConfig {
    pub players: Vec<String>,
    pub minimum: usize,
}

/// Playing-time balance over the whole squad.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PlayingTimeConfig {
    pub minimum_quarters: usize,

    /// Replaces the default forbidden quarter patterns when set.
    #[serde(default)]
    pub forbidden_patterns: Option<Vec<Vec<usize>>>,
}

/// Position variety over the whole squad.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PositionVarietyConfig {
    pub minimum_positions: usize,
}

#[cfg(test)]
mod tests;
