//! Statistics for a finished search.

use std::time::Duration;

/// Counters collected during one `pick()` call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PickStatistics {
    /// Candidates produced by the generator.
    pub generated_count: u64,
    /// Candidates that passed every constraint.
    pub accepted_count: usize,
    /// Time spent searching and selecting.
    pub duration: Duration,
}

impl PickStatistics {
    /// Returns the acceptance rate (accepted / generated).
    pub fn acceptance_rate(&self) -> f64 {
        if self.generated_count == 0 {
            0.0
        } else {
            self.accepted_count as f64 / self.generated_count as f64
        }
    }

    /// Returns generated candidates per second.
    pub fn generation_speed(&self) -> u64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            (self.generated_count as f64 / secs) as u64
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acceptance_rate() {
        let stats = PickStatistics {
            generated_count: 40,
            accepted_count: 10,
            duration: Duration::from_secs(2),
        };
        assert_eq!(stats.acceptance_rate(), 0.25);
        assert_eq!(stats.generation_speed(), 20);
    }

    #[test]
    fn test_empty_statistics() {
        let stats = PickStatistics::default();
        assert_eq!(stats.acceptance_rate(), 0.0);
        assert_eq!(stats.generation_speed(), 0);
    }
}
