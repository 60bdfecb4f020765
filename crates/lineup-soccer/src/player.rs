//! Players and the validated player pool.

use std::collections::HashSet;
use std::fmt::{self, Display};
use std::sync::Arc;

use lineup_core::{LineupError, Result};
use serde::{Deserialize, Serialize};

/// A player, identified by name.
///
/// Cloning is cheap; equality compares names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Player(Arc<str>);

impl Player {
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Player {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// The ordered, duplicate-free set of players available for a game.
///
/// Rules and heuristics look their players up here, so a misspelled name
/// fails when the rule is built rather than silently never matching.
///
/// # Example
///
/// ```
/// use lineup_soccer::PlayerPool;
///
/// let pool = PlayerPool::new(["Asher", "Ransom", "Jacob"]).unwrap();
/// assert_eq!(pool.len(), 3);
/// assert!(pool.require("Jacob").is_ok());
/// assert!(pool.require("Jakob").is_err());
/// assert!(PlayerPool::new(["Asher", "Asher"]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerPool {
    players: Vec<Player>,
}

impl PlayerPool {
    /// Creates a pool from player names.
    ///
    /// # Errors
    ///
    /// Returns [`LineupError::EmptyPool`] for no names and
    /// [`LineupError::DuplicatePlayer`] if a name repeats.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut players = Vec::new();
        for name in names {
            let name = name.as_ref();
            if !seen.insert(name.to_string()) {
                return Err(LineupError::DuplicatePlayer(name.to_string()));
            }
            players.push(Player::new(name));
        }
        if players.is_empty() {
            return Err(LineupError::EmptyPool);
        }
        Ok(Self { players })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Looks up a player by name.
    pub fn require(&self, name: &str) -> Result<Player> {
        self.get(name)
            .cloned()
            .ok_or_else(|| LineupError::UnknownPlayer(name.to_string()))
    }

    /// Looks up several players, failing on the first unknown name.
    pub fn resolve<I, S>(&self, names: I) -> Result<Vec<Player>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| self.require(name.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pool_rejected() {
        let names: [&str; 0] = [];
        assert_eq!(PlayerPool::new(names), Err(LineupError::EmptyPool));
    }

    #[test]
    fn test_duplicate_rejected() {
        assert_eq!(
            PlayerPool::new(["Zeke", "Owen", "Zeke"]),
            Err(LineupError::DuplicatePlayer("Zeke".into()))
        );
    }

    #[test]
    fn test_resolve_keeps_order() {
        let pool = PlayerPool::new(vec!["Jude".to_string(), "Marc".to_string()]).unwrap();
        let players = pool.resolve(["Marc", "Jude"]).unwrap();
        assert_eq!(players, vec![Player::new("Marc"), Player::new("Jude")]);
        assert_eq!(
            pool.resolve(["Marc", "Nobody"]),
            Err(LineupError::UnknownPlayer("Nobody".into()))
        );
    }

    #[test]
    fn test_player_identity_is_name() {
        let a = Player::from("Cyrus");
        let b = Player::new("Cyrus");
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "Cyrus");
    }
}
