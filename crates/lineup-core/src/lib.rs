//! Lineup Core - traits for generate-and-test search
//!
//! This crate provides the abstractions the picker is built on:
//! - [`Generator`] produces complete random candidates
//! - [`Constraint`] accepts or rejects a candidate
//! - [`Heuristic`] scores an accepted candidate
//! - [`UniqueConstraint`] keeps repeated candidates out of the sample
//! - [`LineupError`] reports malformed configuration

pub mod constraint;
pub mod error;
pub mod generator;
pub mod heuristic;
pub mod unique;

pub use constraint::{all_met, first_violated, Constraint};
pub use error::{LineupError, Result};
pub use generator::Generator;
pub use heuristic::{total_score, Heuristic};
pub use unique::UniqueConstraint;
