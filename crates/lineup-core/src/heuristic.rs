//! Soft scoring heuristics.

use crate::constraint::short_type_name;

/// Scores an eligible candidate. Higher is better.
///
/// Scores from every registered heuristic are summed, so there is no fixed
/// range. Implementations must be pure.
pub trait Heuristic<C> {
    /// Returns this heuristic's contribution to the candidate's score.
    fn calc_score(&self, candidate: &C) -> f64;

    /// Name used in log output.
    fn name(&self) -> &str {
        short_type_name(std::any::type_name::<Self>())
    }
}

/// Sums the scores of all heuristics for one candidate.
pub fn total_score<C>(heuristics: &[Box<dyn Heuristic<C>>], candidate: &C) -> f64 {
    heuristics.iter().map(|h| h.calc_score(candidate)).sum()
}
