//! Accumulating builder for candidate sets

use super::{CandidateSet, CandidateSetError};
use crate::core::{Constraint, Word};
use std::collections::BTreeSet;

/// Collects words and validates them into a [`CandidateSet`]
///
/// Words are kept sorted and deduplicated, so the built set iterates in
/// lexicographic order. Builders are single-owner values meant for
/// sequential accumulation.
#[derive(Debug, Clone, Default)]
pub struct CandidateSetBuilder {
    words: BTreeSet<Word>,
}

impl CandidateSetBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a builder with every member of an existing set
    #[must_use]
    pub fn from_set(set: &CandidateSet) -> Self {
        Self {
            words: set.iter().cloned().collect(),
        }
    }

    #[must_use]
    pub fn add(mut self, word: Word) -> Self {
        self.words.insert(word);
        self
    }

    #[must_use]
    pub fn add_all<I>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = Word>,
    {
        self.words.extend(words);
        self
    }

    /// Keep only the words satisfying `constraint`
    #[must_use]
    pub fn filter(mut self, constraint: &Constraint) -> Self {
        self.words.retain(|word| constraint.test(word));
        self
    }

    /// Check that every accumulated word has `word_length` characters
    #[must_use]
    pub fn is_consistent(&self, word_length: usize) -> bool {
        self.words.iter().all(|word| word.len() == word_length)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Build the candidate set
    ///
    /// Returns `Ok(None)` when nothing was accumulated; an empty
    /// accumulation is not a valid set.
    ///
    /// # Errors
    /// Returns `CandidateSetError::InconsistentWordLength` if the words do not
    /// all share the length of the first (lexicographically smallest) word.
    ///
    /// # Examples
    /// ```
    /// use guesswork::core::Word;
    /// use guesswork::solver::CandidateSetBuilder;
    ///
    /// let empty = CandidateSetBuilder::new().build().unwrap();
    /// assert!(empty.is_none());
    ///
    /// let set = CandidateSetBuilder::new()
    ///     .add(Word::new("rebus").unwrap())
    ///     .add(Word::new("redux").unwrap())
    ///     .build()
    ///     .unwrap()
    ///     .unwrap();
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn build(self) -> Result<Option<CandidateSet>, CandidateSetError> {
        let Some(first) = self.words.first() else {
            log::debug!("Nothing accumulated, no candidate set built");
            return Ok(None);
        };

        let expected = first.len();
        if let Some(odd) = self.words.iter().find(|word| word.len() != expected) {
            return Err(CandidateSetError::InconsistentWordLength {
                expected,
                found: odd.len(),
                word: odd.text().to_string(),
            });
        }

        let words: Vec<Word> = self.words.into_iter().collect();
        log::debug!(
            "Built candidate set of {} words of length {expected}",
            words.len()
        );

        Ok(Some(CandidateSet::from_sorted(words, expected)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn empty_build_is_no_result() {
        assert!(matches!(CandidateSetBuilder::new().build(), Ok(None)));
    }

    #[test]
    fn inconsistent_lengths_fail() {
        let result = CandidateSetBuilder::new()
            .add(word("apple"))
            .add(word("orange"))
            .build();

        assert!(matches!(
            result,
            Err(CandidateSetError::InconsistentWordLength {
                expected: 5,
                found: 6,
                ..
            })
        ));
    }

    #[test]
    fn duplicates_collapse() {
        let set = CandidateSetBuilder::new()
            .add(word("rebus"))
            .add(word("rebus"))
            .add_all([word("redux"), word("rebus")])
            .build()
            .unwrap()
            .unwrap();

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn filter_keeps_matching_words() {
        let starts_with_r = Constraint::new(|w: &Word| w.matches_at(0, 'r'));
        let builder = CandidateSetBuilder::new()
            .add_all(["rebus", "redux", "route", "hello"].map(word))
            .filter(&starts_with_r);

        assert_eq!(builder.len(), 3);
        let set = builder.build().unwrap().unwrap();
        assert!(!set.contains(&word("hello")));
    }

    #[test]
    fn filter_to_nothing_builds_no_result() {
        let builder = CandidateSetBuilder::new()
            .add(word("hello"))
            .filter(&Constraint::never());

        assert!(builder.is_empty());
        assert!(matches!(builder.build(), Ok(None)));
    }

    #[test]
    fn filter_can_remove_the_odd_length_word() {
        let builder = CandidateSetBuilder::new()
            .add(word("apple"))
            .add(word("orange"))
            .filter(&Constraint::new(|w: &Word| w.len() == 5));

        assert!(builder.is_consistent(5));
        assert_eq!(builder.build().unwrap().unwrap().word_length(), 5);
    }

    #[test]
    fn seeded_from_existing_set() {
        let set = CandidateSetBuilder::new()
            .add_all(["rebus", "redux"].map(word))
            .build()
            .unwrap()
            .unwrap();

        let grown = CandidateSetBuilder::from_set(&set)
            .add(word("route"))
            .build()
            .unwrap()
            .unwrap();

        assert_eq!(grown.len(), 3);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn is_consistent_checks_every_word() {
        let builder = CandidateSetBuilder::new().add_all(["abc", "abcd"].map(word));
        assert!(!builder.is_consistent(3));
        assert!(!builder.is_consistent(4));
    }
}
