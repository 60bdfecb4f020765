//! Shared test fixtures for lineup crates.
//!
//! Generic generators, constraints and heuristics over plain integers, for
//! exercising the picker without a real domain.
//!
//! - [`generator`] - scripted and random integer generators
//! - [`rules`] - closure-backed and call-counting constraints and heuristics
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! lineup-test = { workspace = true }
//! ```

pub mod generator;
pub mod rules;

pub use generator::{RandomIntGenerator, SequenceGenerator};
pub use rules::{CountingConstraint, FnHeuristic, PredicateConstraint};
