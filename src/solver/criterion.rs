//! Guess selection criteria
//!
//! A criterion is a runtime choice between the scoring functions a
//! [`CandidateSet`] offers. It selects which minimization the search runs;
//! arbitrary criteria go straight to [`CandidateSet::best_guess`].

use super::{CandidateSet, CandidateSetError};
use crate::core::Word;
use std::fmt;

/// Which score a best-guess search minimizes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Criterion {
    /// Minimize the largest number of survivors over all secrets
    #[default]
    WorstCase,
    /// Minimize the mean number of survivors over all secrets
    AverageCase,
}

impl Criterion {
    /// Create criterion from name string
    ///
    /// Supported names: "worst", "worst-case", "minimax", "average",
    /// "average-case", "mean". Defaults to worst case if unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "average" | "average-case" | "mean" => Self::AverageCase,
            _ => Self::WorstCase,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::WorstCase => "worst-case",
            Self::AverageCase => "average-case",
        }
    }

    /// Best guess of `set` under this criterion
    ///
    /// # Errors
    /// Returns `CandidateSetError::Empty` if the set has no members.
    pub fn best_guess(self, set: &CandidateSet) -> Result<&Word, CandidateSetError> {
        match self {
            Self::WorstCase => set.best_worst_case_guess(),
            Self::AverageCase => set.best_average_case_guess(),
        }
    }

    /// Score of `guess` against `set` under this criterion
    ///
    /// # Errors
    /// Returns `CandidateSetError::Empty` if the set has no members.
    pub fn score(self, set: &CandidateSet, guess: &Word) -> Result<f64, CandidateSetError> {
        match self {
            Self::WorstCase => set.worst_case_score(guess).map(|s| s as f64),
            Self::AverageCase => set.average_case_score(guess),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
