//! Guesswork
//!
//! A guessing-game engine for Wordle/Mastermind-style puzzles: feedback
//! constraints, candidate sets with memoized scoring, and worst-case and
//! average-case best-guess search.
//!
//! # Quick Start
//!
//! ```rust
//! use guesswork::core::{Matcher, Word};
//! use guesswork::solver::CandidateSet;
//!
//! let words = ["rebus", "redux", "route", "hello"].map(|w| Word::new(w).unwrap());
//! let set = CandidateSet::from_words(words).unwrap().unwrap();
//!
//! // The guess that leaves the fewest candidates in the worst case
//! let guess = set.best_worst_case_guess().unwrap();
//! assert_eq!(guess.text(), "rebus");
//!
//! // Feedback against a secret narrows the set
//! let secret = Word::new("redux").unwrap();
//! let feedback = Matcher::of(&secret, guess).constraint();
//! let remaining = set.filter(&feedback).unwrap();
//! assert_eq!(remaining.words(), &[secret]);
//! ```

// Core domain types
pub mod core;

// Candidate sets and guess selection
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
