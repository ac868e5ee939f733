//! Structured feedback for a guess
//!
//! Feedback records what comparing a secret key with a guess revealed:
//! - Exact: guess letter at the same position as in the key
//! - Misplaced: guess letter present in the key at another, still-available position
//! - Absent: guess letter left over after exact and misplaced credit
//!
//! The structure is kept separately from any executable test, so a
//! [`Constraint`] can always be rebuilt from it with [`Feedback::to_constraint`].

use super::word::IndexedChar;
use super::{Constraint, Word};
use std::fmt;

/// Per-position outcome of a guess letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Exact,
    Misplaced,
    Absent,
}

impl Mark {
    /// Square emoji used for terminal output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Misplaced => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback derived from one key/guess comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    key: Word,
    exact: Vec<IndexedChar>,
    misplaced: Vec<IndexedChar>,
    absent: Vec<char>,
    marks: Vec<Mark>,
}

impl Feedback {
    pub(crate) const fn new(
        key: Word,
        exact: Vec<IndexedChar>,
        misplaced: Vec<IndexedChar>,
        absent: Vec<char>,
        marks: Vec<Mark>,
    ) -> Self {
        Self {
            key,
            exact,
            misplaced,
            absent,
            marks,
        }
    }

    /// The secret key this feedback was derived from
    #[must_use]
    pub const fn key(&self) -> &Word {
        &self.key
    }

    /// Exact matches in ascending index order
    #[must_use]
    pub fn exact(&self) -> &[IndexedChar] {
        &self.exact
    }

    /// Misplaced guess letters with their guessed positions, in guess order
    #[must_use]
    pub fn misplaced(&self) -> &[IndexedChar] {
        &self.misplaced
    }

    /// Absent letters, deduplicated, in first-seen guess order
    #[must_use]
    pub fn absent(&self) -> &[char] {
        &self.absent
    }

    /// One mark per guess position
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.exact.len()
    }

    #[must_use]
    pub fn count_misplaced(&self) -> usize {
        self.misplaced.len()
    }

    /// Every position matched exactly
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.marks.iter().all(|&m| m == Mark::Exact)
    }

    /// Check whether a candidate word is consistent with this feedback
    ///
    /// The key itself is always accepted. Any other word must hold every
    /// exact letter in place, contain every misplaced letter somewhere other
    /// than its guessed position, and contain none of the absent letters.
    #[must_use]
    pub fn accepts(&self, word: &Word) -> bool {
        if *word == self.key {
            return true;
        }

        self.exact
            .iter()
            .all(|ic| word.matches_at(ic.index, ic.character))
            && self
                .misplaced
                .iter()
                .all(|ic| word.contains_elsewhere(ic.index, ic.character))
            && !self.absent.iter().any(|&c| word.contains(c))
    }

    /// Human-readable summary, e.g. `Correct: r____, Misplaced: ue, Absent: ot`
    #[must_use]
    pub fn describe(&self) -> String {
        let mut template = vec!['_'; self.key.len()];
        for ic in &self.exact {
            template[ic.index] = ic.character;
        }

        let mut pattern = format!("Correct: {}", template.into_iter().collect::<String>());

        if !self.misplaced.is_empty() {
            pattern.push_str(", Misplaced: ");
            pattern.extend(self.misplaced.iter().map(|ic| ic.character));
        }

        if !self.absent.is_empty() {
            pattern.push_str(", Absent: ");
            pattern.extend(self.absent.iter());
        }

        pattern
    }

    /// Build the executable constraint for this feedback
    #[must_use]
    pub fn to_constraint(&self) -> Constraint {
        let pattern = self.describe();
        let feedback = self.clone();
        Constraint::described(move |word: &Word| feedback.accepts(word), pattern)
    }

    /// Render the marks as a row of emoji squares
    ///
    /// # Examples
    /// ```
    /// use guesswork::core::{Matcher, Word};
    ///
    /// let key = Word::new("slate").unwrap();
    /// let guess = Word::new("crane").unwrap();
    /// let feedback = Matcher::of(&key, &guess).feedback().unwrap();
    /// assert_eq!(feedback.to_emoji(), "⬜⬜🟩⬜🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl From<&Feedback> for Constraint {
    fn from(feedback: &Feedback) -> Self {
        feedback.to_constraint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Matcher;

    fn feedback(key: &str, guess: &str) -> Feedback {
        let key = Word::new(key).unwrap();
        let guess = Word::new(guess).unwrap();
        Matcher::of(&key, &guess).feedback().unwrap()
    }

    #[test]
    fn describe_full_pattern() {
        let fb = feedback("rebus", "route");
        assert_eq!(fb.describe(), "Correct: r____, Misplaced: ue, Absent: ot");
    }

    #[test]
    fn describe_omits_empty_sections() {
        assert_eq!(feedback("apple", "apple").describe(), "Correct: apple");
        assert_eq!(
            feedback("abcde", "fghij").describe(),
            "Correct: _____, Absent: fghij"
        );
    }

    #[test]
    fn describe_deduplicates_absent_letters() {
        // Neither l is credited: "dozen" has no l at all
        let fb = feedback("dozen", "llama");
        assert_eq!(fb.absent(), &['l', 'a', 'm']);
    }

    #[test]
    fn marks_follow_guess_positions() {
        let fb = feedback("floor", "robot");
        assert_eq!(
            fb.marks(),
            &[
                Mark::Misplaced,
                Mark::Misplaced,
                Mark::Absent,
                Mark::Exact,
                Mark::Absent
            ]
        );
        assert_eq!(fb.count_exact(), 1);
        assert_eq!(fb.count_misplaced(), 2);
        assert_eq!(fb.to_emoji(), "🟨🟨⬜🟩⬜");
    }

    #[test]
    fn solved_only_when_all_exact() {
        assert!(feedback("crane", "crane").is_solved());
        assert!(!feedback("crane", "crate").is_solved());
    }

    #[test]
    fn accepts_key_even_when_rules_would_reject() {
        // The extra e's in "eerie" are absent, yet "crane" contains an e
        let fb = feedback("crane", "eerie");
        assert_eq!(fb.absent(), &['e', 'i']);
        assert!(fb.accepts(&Word::new("crane").unwrap()));
        assert!(!fb.accepts(&Word::new("brace").unwrap()));
    }

    #[test]
    fn to_constraint_matches_accepts() {
        let fb = feedback("rebus", "route");
        let constraint = fb.to_constraint();

        for text in ["rebus", "redux", "route", "hello"] {
            let w = Word::new(text).unwrap();
            assert_eq!(constraint.test(&w), fb.accepts(&w), "mismatch on {text}");
        }
        assert_eq!(constraint.pattern(), fb.describe());
        assert_eq!(Constraint::from(&fb).pattern(), fb.describe());
    }

    #[test]
    fn display_matches_describe() {
        let fb = feedback("apple", "hello");
        assert_eq!(fb.to_string(), fb.describe());
    }
}
