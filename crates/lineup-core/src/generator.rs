//! Candidate generation.

use rand::Rng;

/// Produces complete candidates at random.
///
/// A generator knows nothing about constraints or scoring. Every call returns
/// a whole, structurally valid candidate; calls are independent, so the same
/// candidate may come back more than once. Randomness is supplied by the
/// caller, which lets tests drive a generator from a seeded rng.
///
/// # Example
///
/// ```
/// use lineup_core::Generator;
/// use rand::rngs::StdRng;
/// use rand::{Rng, SeedableRng};
///
/// struct Dice;
///
/// impl Generator for Dice {
///     type Candidate = u8;
///
///     fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
///         rng.random_range(1..=6)
///     }
/// }
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let roll = Dice.generate(&mut rng);
/// assert!((1..=6).contains(&roll));
/// ```
pub trait Generator {
    /// The structure being generated, checked, and scored.
    type Candidate;

    /// Generates one complete candidate.
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Candidate;
}
