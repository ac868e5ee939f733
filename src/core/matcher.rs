//! Feedback matching between a secret key and a guess
//!
//! Implements multiplicity-correct feedback: a repeated guess letter is only
//! credited as many times as it remains available in the key.

use super::feedback::{Feedback, Mark};
use super::word::IndexedChar;
use super::{Constraint, Word};

/// Binds a key and a guess for comparison
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    key: &'a Word,
    guess: &'a Word,
}

impl<'a> Matcher<'a> {
    /// Pair a secret key with a guess
    ///
    /// Words of different lengths are accepted here; the mismatch is
    /// reported when the feedback is computed.
    #[must_use]
    pub const fn of(key: &'a Word, guess: &'a Word) -> Self {
        Self { key, guess }
    }

    /// Compute the structured feedback
    ///
    /// Returns `None` when key and guess differ in length, since no
    /// feedback exists for such a pair.
    ///
    /// # Algorithm
    /// 1. Exact pass: equal letters at equal positions consume both positions
    /// 2. Misplaced pass: each remaining guess position takes the lowest
    ///    unconsumed key position holding the same letter
    /// 3. Remaining guess letters are absent
    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        let key = self.key.chars();
        let guess = self.guess.chars();

        if key.len() != guess.len() {
            return None;
        }

        let mut key_used = vec![false; key.len()];
        let mut marks = vec![Mark::Absent; guess.len()];
        let mut exact = Vec::new();

        for (i, (&k, &g)) in key.iter().zip(guess).enumerate() {
            if k == g {
                exact.push(IndexedChar::new(i, g));
                key_used[i] = true;
                marks[i] = Mark::Exact;
            }
        }

        let mut misplaced = Vec::new();

        for (i, &g) in guess.iter().enumerate() {
            if marks[i] != Mark::Absent {
                continue;
            }

            let available = key
                .iter()
                .enumerate()
                .position(|(j, &k)| !key_used[j] && k == g);

            if let Some(j) = available {
                misplaced.push(IndexedChar::new(i, g));
                key_used[j] = true;
                marks[i] = Mark::Misplaced;
            }
        }

        let mut absent: Vec<char> = Vec::new();
        for (&g, _) in guess
            .iter()
            .zip(&marks)
            .filter(|&(_, &m)| m == Mark::Absent)
        {
            if !absent.contains(&g) {
                absent.push(g);
            }
        }

        Some(Feedback::new(
            self.key.clone(),
            exact,
            misplaced,
            absent,
            marks,
        ))
    }

    /// Compute the feedback constraint
    ///
    /// Mismatched lengths yield [`Constraint::never`].
    ///
    /// # Examples
    /// ```
    /// use guesswork::core::{Matcher, Word};
    ///
    /// let key = Word::new("apple").unwrap();
    /// let guess = Word::new("apple").unwrap();
    /// let constraint = Matcher::of(&key, &guess).constraint();
    ///
    /// assert!(constraint.test(&key));
    /// assert!(!constraint.test(&Word::new("ample").unwrap()));
    /// ```
    #[must_use]
    pub fn constraint(&self) -> Constraint {
        self.feedback()
            .map_or_else(Constraint::never, |feedback| feedback.to_constraint())
    }
}
