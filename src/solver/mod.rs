//! Candidate sets and guess selection
//!
//! This module holds the candidate set abstraction: filtering by constraints,
//! memoized pairwise scoring, worst-case and average-case search, and the
//! round state that a game loop drives.

mod builder;
mod candidates;
mod criterion;
mod error;
mod round;
mod scoring;
mod selector;

pub use builder::CandidateSetBuilder;
pub use candidates::{CandidateSet, PARALLEL_THRESHOLD};
pub use criterion::Criterion;
pub use error::CandidateSetError;
pub use round::RoundState;
