use lineup_core::{Constraint, LineupError, Result};
use smallvec::SmallVec;

use crate::player::{Player, PlayerPool};
use crate::roster::{GameRoster, QUARTER_COUNT};

/// 1-based quarter numbers a player appears in, ascending.
pub type QuarterPattern = SmallVec<[usize; QUARTER_COUNT]>;

/// Two-quarter patterns rejected by default: both quarters of one half,
/// or the first and last quarter.
pub const DEFAULT_FORBIDDEN_PATTERNS: [[usize; 2]; 3] = [[1, 2], [3, 4], [1, 4]];

/// Balances playing time across tracked players.
///
/// A game passes when every tracked player
/// - plays at least `minimum_quarters` quarters,
/// - does not play exactly one of the forbidden patterns,
///
/// and the busiest and least busy tracked players differ by at most one quarter.
#[derive(Debug, Clone)]
pub struct PlayingTimeConstraint {
    players: Vec<Player>,
    minimum_quarters: usize,
    forbidden_patterns: Vec<QuarterPattern>,
}

impl PlayingTimeConstraint {
    pub fn new<I, S>(pool: &PlayerPool, players: I, minimum_quarters: usize) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            players: pool.resolve(players)?,
            minimum_quarters,
            forbidden_patterns: DEFAULT_FORBIDDEN_PATTERNS
                .iter()
                .map(|p| QuarterPattern::from_slice(p))
                .collect(),
        })
    }

    /// Replaces the forbidden patterns.
    ///
    /// Each pattern is sorted; quarter numbers must lie in `1..=4`.
    pub fn with_forbidden_patterns<I, P>(mut self, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[usize]>,
    {
        let mut forbidden = Vec::new();
        for pattern in patterns {
            let mut pattern = QuarterPattern::from_slice(pattern.as_ref());
            if let Some(&bad) = pattern.iter().find(|&&q| q == 0 || q > QUARTER_COUNT) {
                return Err(LineupError::InvalidRule(format!(
                    "forbidden pattern {:?} names quarter {}, expected 1..={}",
                    pattern.as_slice(),
                    bad,
                    QUARTER_COUNT
                )));
            }
            pattern.sort_unstable();
            pattern.dedup();
            forbidden.push(pattern);
        }
        self.forbidden_patterns = forbidden;
        Ok(self)
    }

    pub fn minimum_quarters(&self) -> usize {
        self.minimum_quarters
    }

    pub fn forbidden_patterns(&self) -> &[QuarterPattern] {
        &self.forbidden_patterns
    }
}

impl Constraint<GameRoster> for PlayingTimeConstraint {
    fn is_met(&self, roster: &GameRoster) -> bool {
        let mut least = QUARTER_COUNT;
        let mut most = 0;

        for player in &self.players {
            let pattern: QuarterPattern = roster.quarters_played(player).collect();
            let played = pattern.len();
            if played < self.minimum_quarters || self.forbidden_patterns.contains(&pattern) {
                return false;
            }
            least = least.min(played);
            most = most.max(played);
        }

        most <= least + 1
    }

    fn name(&self) -> &str {
        "playing_time"
    }
}
