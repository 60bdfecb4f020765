//! Random game roster generation.

use lineup_core::{Generator, LineupError, Result};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use tracing::debug;

use crate::player::{Player, PlayerPool};
use crate::roster::{GameRoster, QuarterRoster, QUARTER_COUNT, QUARTER_SIZE};

/// Players needed to staff one half (two quarters).
const HALF_SIZE: usize = 2 * QUARTER_SIZE;

/// Deals random four-quarter rosters from a player pool.
///
/// Each half starts from the whole pool, is topped up to fourteen entries
/// with players sampled without replacement, then shuffled. Quarters are
/// dealt from the end of the two halves laid end to end, so the second half
/// staffs the first two quarters.
#[derive(Debug, Clone)]
pub struct GameRosterGenerator {
    players: Vec<Player>,
}

impl GameRosterGenerator {
    /// Fails when the pool cannot staff a single quarter.
    pub fn new(pool: &PlayerPool) -> Result<Self> {
        if pool.len() < QUARTER_SIZE {
            return Err(LineupError::PoolTooSmall {
                required: QUARTER_SIZE,
                actual: pool.len(),
            });
        }
        debug!(
            event = "generator_ready",
            players = pool.len(),
            padded = pool.len() < HALF_SIZE,
        );
        Ok(Self {
            players: pool.players().to_vec(),
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    fn deal_half<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Player> {
        let mut half = self.players.clone();
        while half.len() < HALF_SIZE {
            let missing = HALF_SIZE - half.len();
            let amount = missing.min(self.players.len());
            half.extend(self.players.choose_multiple(rng, amount).cloned());
        }
        half.shuffle(rng);
        half
    }
}

impl Generator for GameRosterGenerator {
    type Candidate = GameRoster;

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> GameRoster {
        let mut dealt = self.deal_half(rng);
        dealt.extend(self.deal_half(rng));

        // Read from the back: quarter q takes the 7 entries ending QUARTER_SIZE * q from the end.
        let last = dealt.len() - 1;
        let slot = |q: usize, k: usize| dealt[last - (q * QUARTER_SIZE + k)].clone();
        let quarters: [QuarterRoster; QUARTER_COUNT] = std::array::from_fn(|q| {
            QuarterRoster::new(
                slot(q, 0),
                [slot(q, 1), slot(q, 2)],
                [slot(q, 3), slot(q, 4)],
                [slot(q, 5), slot(q, 6)],
            )
        });
        GameRoster::new(quarters)
    }
}
