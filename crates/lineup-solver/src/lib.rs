//! Lineup Solver Engine
//!
//! This crate provides the picker that drives a bounded random search:
//! - Picker and PickerBuilder
//! - Termination conditions (sample count, time)
//! - Injectable clocks for deterministic time budgets
//! - Progress events and statistics

pub mod clock;
pub mod event;
pub mod picker;
pub mod scope;
pub mod statistics;
pub mod termination;

#[cfg(test)]
mod test_utils;

pub use clock::{Clock, ManualClock, SystemClock};
pub use event::{NoProgress, ProgressListener, RecordingListener, SearchEvent};
pub use picker::{
    PickOutcome, Picker, PickerBuilder, Selection, DEFAULT_SAMPLES_PER_HEURISTIC,
    DEFAULT_TIME_LIMIT_MILLIS,
};
pub use scope::SearchScope;
pub use statistics::PickStatistics;
pub use termination::{OrTermination, SampleCountTermination, Termination, TimeTermination};
