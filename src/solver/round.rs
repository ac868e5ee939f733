//! Round-by-round narrowing state
//!
//! A game round holds the current candidate set. Applying a feedback
//! constraint moves it to the next round, or to a terminal state once at most
//! one candidate remains.

use super::CandidateSet;
use crate::core::{Constraint, Word};

/// Narrowing progress of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundState {
    /// More than one candidate remains
    Active(CandidateSet),
    /// Exactly one candidate remains
    Resolved(Word),
    /// No candidate satisfies the feedback so far
    Exhausted,
}

impl RoundState {
    /// Enter the state matching the size of `set`
    #[must_use]
    pub fn start(set: CandidateSet) -> Self {
        match set.single() {
            Some(only) => Self::Resolved(only.clone()),
            None => Self::Active(set),
        }
    }

    /// Filter the candidates by `constraint`
    ///
    /// Terminal states are returned unchanged.
    ///
    /// # Examples
    /// ```
    /// use guesswork::core::{Matcher, Word};
    /// use guesswork::solver::{CandidateSet, RoundState};
    ///
    /// let words = ["rebus", "redux", "route", "hello"].map(|w| Word::new(w).unwrap());
    /// let set = CandidateSet::from_words(words).unwrap().unwrap();
    ///
    /// let secret = Word::new("hello").unwrap();
    /// let guess = Word::new("route").unwrap();
    /// let feedback = Matcher::of(&secret, &guess).constraint();
    ///
    /// let state = RoundState::start(set).advance(&feedback);
    /// assert_eq!(state, RoundState::Resolved(secret));
    /// ```
    #[must_use]
    pub fn advance(self, constraint: &Constraint) -> Self {
        match self {
            Self::Active(set) => set.filter(constraint).map_or(Self::Exhausted, Self::start),
            terminal => terminal,
        }
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Active(_))
    }

    /// Current candidates while the round is active
    #[must_use]
    pub const fn candidates(&self) -> Option<&CandidateSet> {
        match self {
            Self::Active(set) => Some(set),
            _ => None,
        }
    }

    /// Number of candidates left
    #[must_use]
    pub fn remaining(&self) -> usize {
        match self {
            Self::Active(set) => set.len(),
            Self::Resolved(_) => 1,
            Self::Exhausted => 0,
        }
    }
}
