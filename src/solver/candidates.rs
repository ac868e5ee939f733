//! Immutable candidate sets
//!
//! A candidate set is a non-empty, duplicate-free collection of equal-length
//! words. Its membership never changes after construction; filtering yields
//! a new set. Score caches live alongside the members and are rebuilt for
//! every new set.

use super::builder::CandidateSetBuilder;
use super::scoring::ScoreCache;
use super::CandidateSetError;
use crate::core::{Constraint, Word};
use std::fmt;

/// Sets at least this large are scored with rayon
pub const PARALLEL_THRESHOLD: usize = 64;

/// Non-empty set of equal-length candidate words
pub struct CandidateSet {
    words: Vec<Word>,
    word_length: usize,
    pub(super) cache: ScoreCache,
}

impl CandidateSet {
    /// `words` must be sorted, deduplicated and all of `word_length`
    pub(super) fn from_sorted(words: Vec<Word>, word_length: usize) -> Self {
        Self {
            words,
            word_length,
            cache: ScoreCache::default(),
        }
    }

    /// Start a builder
    #[must_use]
    pub fn builder() -> CandidateSetBuilder {
        CandidateSetBuilder::new()
    }

    /// Build a set directly from words
    ///
    /// # Errors
    /// Returns `CandidateSetError::InconsistentWordLength` on mixed lengths.
    pub fn from_words<I>(words: I) -> Result<Option<Self>, CandidateSetError>
    where
        I: IntoIterator<Item = Word>,
    {
        CandidateSetBuilder::new().add_all(words).build()
    }

    /// Number of members
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of members satisfying `constraint`
    #[must_use]
    pub fn count(&self, constraint: &Constraint) -> usize {
        self.words.iter().filter(|word| constraint.test(word)).count()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.binary_search(word).is_ok()
    }

    /// Length shared by every member
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Members in lexicographic order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// The only member, if exactly one remains
    #[must_use]
    pub fn single(&self) -> Option<&Word> {
        match self.words.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// Build a new set of the members satisfying `constraint`
    ///
    /// Returns `None` when no member survives. The receiver is unchanged.
    #[must_use]
    pub fn filter(&self, constraint: &Constraint) -> Option<Self> {
        let words: Vec<Word> = self
            .words
            .iter()
            .filter(|word| constraint.test(word))
            .cloned()
            .collect();

        log::debug!(
            "Filtered {} -> {} candidates by {constraint}",
            self.words.len(),
            words.len()
        );

        if words.is_empty() {
            None
        } else {
            Some(Self::from_sorted(words, self.word_length))
        }
    }

    pub(super) fn ensure_non_empty(&self) -> Result<(), CandidateSetError> {
        if self.words.is_empty() {
            Err(CandidateSetError::Empty)
        } else {
            Ok(())
        }
    }

    pub(super) fn is_large(&self) -> bool {
        self.words.len() >= PARALLEL_THRESHOLD
    }
}

impl Clone for CandidateSet {
    /// Clones the members; the clone starts with empty caches
    fn clone(&self) -> Self {
        Self::from_sorted(self.words.clone(), self.word_length)
    }
}

impl PartialEq for CandidateSet {
    fn eq(&self, other: &Self) -> bool {
        self.words == other.words
    }
}

impl Eq for CandidateSet {}

impl fmt::Debug for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CandidateSet")
            .field("word_length", &self.word_length)
            .field("words", &self.words)
            .finish_non_exhaustive()
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn sample() -> CandidateSet {
        CandidateSet::from_words(["route", "hello", "rebus", "redux"].map(word))
            .unwrap()
            .unwrap()
    }

    #[test]
    fn basic_accessors() {
        let set = sample();
        assert_eq!(set.len(), 4);
        assert!(!set.is_empty());
        assert_eq!(set.word_length(), 5);
        assert!(set.contains(&word("redux")));
        assert!(!set.contains(&word("crane")));
        assert!(set.single().is_none());
    }

    #[test]
    fn iteration_is_lexicographic() {
        let set = sample();
        let texts: Vec<&str> = set.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["hello", "rebus", "redux", "route"]);
        assert_eq!((&set).into_iter().count(), 4);
    }

    #[test]
    fn count_by_constraint() {
        let set = sample();
        let has_r = Constraint::new(|w: &Word| w.contains('r'));
        assert_eq!(set.count(&has_r), 3);
        assert_eq!(set.count(&Constraint::never()), 0);
    }

    #[test]
    fn filter_produces_new_set() {
        let set = sample();
        let has_u = Constraint::new(|w: &Word| w.contains('u'));

        let filtered = set.filter(&has_u).unwrap();
        assert_eq!(filtered.len(), 3);
        assert!(!filtered.contains(&word("hello")));
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn filter_to_nothing_is_none() {
        assert!(sample().filter(&Constraint::never()).is_none());
    }

    #[test]
    fn single_member() {
        let set = CandidateSet::from_words([word("hello")]).unwrap().unwrap();
        assert_eq!(set.single(), Some(&word("hello")));
    }

    #[test]
    fn clone_keeps_members() {
        let set = sample();
        assert_eq!(set.clone(), set);
    }

    #[test]
    fn candidate_set_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CandidateSet>();
    }
}
