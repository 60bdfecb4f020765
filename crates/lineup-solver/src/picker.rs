//! The picker: bounded generate-and-test search followed by selection.
//!
//! Logging levels:
//! - **INFO**: search start and end
//! - **DEBUG**: each accepted candidate
//! - **TRACE**: each rejected candidate and the constraint that rejected it

use std::fmt::{self, Debug};
use std::time::Duration;

use lineup_core::{
    first_violated, total_score, Constraint, Generator, Heuristic, LineupError, Result,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, trace, warn};

use crate::clock::{Clock, SystemClock};
use crate::event::{NoProgress, ProgressListener, SearchEvent};
use crate::scope::SearchScope;
use crate::statistics::PickStatistics;
use crate::termination::{OrTermination, SampleCountTermination, Termination, TimeTermination};

/// Default search time budget in milliseconds.
pub const DEFAULT_TIME_LIMIT_MILLIS: u64 = 10_000;

/// Accepted candidates to compare per registered heuristic, by default.
pub const DEFAULT_SAMPLES_PER_HEURISTIC: usize = 5;

/// The candidate chosen by a successful search.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<C> {
    /// The winning candidate.
    pub candidate: C,
    /// Its summed heuristic score.
    pub score: f64,
    /// Its 0-based position among the accepted candidates.
    pub index: usize,
}

/// Result of one `pick()` call.
///
/// Finding nothing is an ordinary outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum PickOutcome<C> {
    Found(Selection<C>),
    NoSolution,
}

impl<C> PickOutcome<C> {
    pub fn is_found(&self) -> bool {
        matches!(self, PickOutcome::Found(_))
    }

    pub fn selection(&self) -> Option<&Selection<C>> {
        match self {
            PickOutcome::Found(selection) => Some(selection),
            PickOutcome::NoSolution => None,
        }
    }

    pub fn into_selection(self) -> Option<Selection<C>> {
        match self {
            PickOutcome::Found(selection) => Some(selection),
            PickOutcome::NoSolution => None,
        }
    }

    /// Returns the winning candidate, if any.
    pub fn into_candidate(self) -> Option<C> {
        self.into_selection().map(|s| s.candidate)
    }
}

type SearchTermination = OrTermination<(SampleCountTermination, TimeTermination)>;

/// Searches a bounded random sample and returns the best eligible candidate.
///
/// Each call to [`Picker::pick`] runs three phases:
///
/// 1. generate candidates until `sample_size` have passed every constraint or
///    the time budget runs out, whichever comes first;
/// 2. report "no solution" if nothing was accepted;
/// 3. score every accepted candidate and return the first one with the
///    highest total score.
///
/// # Example
///
/// ```
/// use lineup_core::{Constraint, Generator, Heuristic};
/// use lineup_solver::PickerBuilder;
/// use rand::Rng;
///
/// struct Digits;
/// impl Generator for Digits {
///     type Candidate = u32;
///     fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
///         rng.random_range(0..10)
///     }
/// }
///
/// struct Even;
/// impl Constraint<u32> for Even {
///     fn is_met(&self, c: &u32) -> bool { c % 2 == 0 }
/// }
///
/// struct Largest;
/// impl Heuristic<u32> for Largest {
///     fn calc_score(&self, c: &u32) -> f64 { f64::from(*c) }
/// }
///
/// let mut picker = PickerBuilder::new(Digits)
///     .with_constraint(Even)
///     .with_heuristic(Largest)
///     .with_seed(42)
///     .build()
///     .unwrap();
///
/// let best = picker.pick().into_candidate().unwrap();
/// assert_eq!(best % 2, 0);
/// ```
pub struct Picker<G: Generator> {
    generator: G,
    constraints: Vec<Box<dyn Constraint<G::Candidate>>>,
    heuristics: Vec<Box<dyn Heuristic<G::Candidate>>>,
    termination: SearchTermination,
    clock: Box<dyn Clock>,
    listener: Box<dyn ProgressListener>,
    rng: StdRng,
    last_statistics: Option<PickStatistics>,
}

impl<G: Generator + Debug> Debug for Picker<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Picker")
            .field("generator", &self.generator)
            .field("constraints", &self.constraints.len())
            .field("heuristics", &self.heuristics.len())
            .field("termination", &self.termination)
            .field("clock", &self.clock)
            .finish()
    }
}

impl<G: Generator> Picker<G> {
    /// Creates a picker with default budget, system clock and a silent listener.
    pub fn new(
        generator: G,
        constraints: Vec<Box<dyn Constraint<G::Candidate>>>,
        heuristics: Vec<Box<dyn Heuristic<G::Candidate>>>,
    ) -> Result<Self> {
        PickerBuilder::new(generator)
            .with_constraints(constraints)
            .with_heuristics(heuristics)
            .build()
    }

    /// Target number of accepted candidates to compare.
    pub fn sample_size(&self) -> usize {
        (self.termination.0).0.limit()
    }

    pub fn time_limit(&self) -> Duration {
        (self.termination.0).1.limit()
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    pub fn heuristic_count(&self) -> usize {
        self.heuristics.len()
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Statistics of the most recent `pick()` call.
    pub fn last_statistics(&self) -> Option<&PickStatistics> {
        self.last_statistics.as_ref()
    }

    /// Sums every heuristic's score for one candidate.
    pub fn score(&self, candidate: &G::Candidate) -> f64 {
        total_score(&self.heuristics, candidate)
    }

    /// Runs one search and returns the best accepted candidate.
    pub fn pick(&mut self) -> PickOutcome<G::Candidate> {
        let sample_size = self.sample_size();
        self.notify(SearchEvent::Started { sample_size });
        info!(
            event = "pick_start",
            sample_size = sample_size as u64,
            time_limit_ms = self.time_limit().as_millis() as u64,
            constraint_count = self.constraints.len() as u64,
            heuristic_count = self.heuristics.len() as u64,
        );

        let mut scope = SearchScope::new(self.clock.as_ref());
        while !self.termination.is_terminated(&scope) {
            let candidate = self.generator.generate(&mut self.rng);
            let generated = scope.increment_generated_count();

            match first_violated(&self.constraints, &candidate) {
                Some(rejected_by) => {
                    trace!(
                        event = "candidate_rejected",
                        generated,
                        constraint = rejected_by.name(),
                    );
                }
                None => {
                    for constraint in &self.constraints {
                        constraint.on_accepted(&candidate);
                    }
                    let index = scope.accept(candidate);
                    debug!(event = "candidate_accepted", index = index as u64, generated);
                    self.notify(SearchEvent::Accepted { index });
                }
            }
        }

        let start_time = scope.start_time();
        let generated_count = scope.generated_count();
        let accepted = scope.into_accepted();
        let accepted_count = accepted.len();

        let outcome = if accepted.is_empty() {
            self.notify(SearchEvent::NoSolution);
            PickOutcome::NoSolution
        } else {
            PickOutcome::Found(self.select(accepted))
        };

        let statistics = PickStatistics {
            generated_count,
            accepted_count,
            duration: self.clock.now().saturating_duration_since(start_time),
        };

        match &outcome {
            PickOutcome::Found(selection) => info!(
                event = "pick_end",
                generated = generated_count,
                accepted = accepted_count as u64,
                duration_ms = statistics.duration.as_millis() as u64,
                speed = statistics.generation_speed(),
                acceptance_rate = statistics.acceptance_rate(),
                score = selection.score,
            ),
            PickOutcome::NoSolution => warn!(
                event = "no_solution",
                generated = generated_count,
                duration_ms = statistics.duration.as_millis() as u64,
            ),
        }

        self.last_statistics = Some(statistics);
        outcome
    }

    // Scores every candidate; the first to reach the top score wins.
    // `accepted` must not be empty.
    fn select(&self, mut accepted: Vec<G::Candidate>) -> Selection<G::Candidate> {
        let mut index = 0;
        let mut score = f64::NAN;
        for (i, candidate) in accepted.iter().enumerate() {
            let candidate_score = self.score(candidate);
            trace!(event = "candidate_scored", index = i as u64, score = candidate_score);
            if i == 0 || is_better(candidate_score, score) {
                index = i;
                score = candidate_score;
            }
        }

        Selection {
            candidate: accepted.swap_remove(index),
            score,
            index,
        }
    }

    fn notify(&self, event: SearchEvent) {
        self.listener.on_progress(&event.to_string());
    }
}

// NaN never beats a real score.
fn is_better(score: f64, top: f64) -> bool {
    score > top || (top.is_nan() && !score.is_nan())
}

/// Builder for [`Picker`].
///
/// Validates the search budget when building.
pub struct PickerBuilder<G: Generator> {
    generator: G,
    constraints: Vec<Box<dyn Constraint<G::Candidate>>>,
    heuristics: Vec<Box<dyn Heuristic<G::Candidate>>>,
    sample_size: Option<usize>,
    time_limit: Duration,
    clock: Option<Box<dyn Clock>>,
    listener: Box<dyn ProgressListener>,
    seed: Option<u64>,
}

impl<G: Generator> PickerBuilder<G> {
    /// Creates a builder with the default budget.
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            constraints: Vec::new(),
            heuristics: Vec::new(),
            sample_size: None,
            time_limit: Duration::from_millis(DEFAULT_TIME_LIMIT_MILLIS),
            clock: None,
            listener: Box::new(NoProgress),
            seed: None,
        }
    }

    /// Adds a hard constraint. Constraints are checked in insertion order.
    pub fn with_constraint<K>(mut self, constraint: K) -> Self
    where
        K: Constraint<G::Candidate> + 'static,
    {
        self.constraints.push(Box::new(constraint));
        self
    }

    pub fn with_constraints(
        mut self,
        constraints: impl IntoIterator<Item = Box<dyn Constraint<G::Candidate>>>,
    ) -> Self {
        self.constraints.extend(constraints);
        self
    }

    /// Adds a scoring heuristic.
    pub fn with_heuristic<H>(mut self, heuristic: H) -> Self
    where
        H: Heuristic<G::Candidate> + 'static,
    {
        self.heuristics.push(Box::new(heuristic));
        self
    }

    pub fn with_heuristics(
        mut self,
        heuristics: impl IntoIterator<Item = Box<dyn Heuristic<G::Candidate>>>,
    ) -> Self {
        self.heuristics.extend(heuristics);
        self
    }

    /// Sets how many accepted candidates to compare.
    ///
    /// Defaults to five per heuristic.
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = Some(sample_size);
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    pub fn with_time_limit_millis(self, ms: u64) -> Self {
        self.with_time_limit(Duration::from_millis(ms))
    }

    /// Replaces the system clock.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Sets the progress callback. Messages are discarded by default.
    pub fn with_progress(mut self, listener: impl ProgressListener + 'static) -> Self {
        self.listener = Box::new(listener);
        self
    }

    /// Seeds the random source for reproducible searches.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the picker.
    ///
    /// # Errors
    ///
    /// Returns [`LineupError::Config`] if the sample size resolves to zero
    /// (for example no heuristics and no explicit size) or the time limit
    /// is zero.
    pub fn build(self) -> Result<Picker<G>> {
        let sample_size = self
            .sample_size
            .unwrap_or(DEFAULT_SAMPLES_PER_HEURISTIC * self.heuristics.len());
        if sample_size == 0 {
            return Err(LineupError::Config(
                "sample size must be at least 1; set it explicitly when no heuristics are registered"
                    .to_string(),
            ));
        }
        if self.time_limit.is_zero() {
            return Err(LineupError::Config(
                "time limit must be greater than zero".to_string(),
            ));
        }

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Picker {
            generator: self.generator,
            constraints: self.constraints,
            heuristics: self.heuristics,
            termination: OrTermination((
                SampleCountTermination::new(sample_size),
                TimeTermination::new(self.time_limit),
            )),
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock)),
            listener: self.listener,
            rng,
            last_statistics: None,
        })
    }
}

#[cfg(test)]
#[path = "picker_tests.rs"]
mod tests;
