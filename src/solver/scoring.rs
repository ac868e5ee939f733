//! Pairwise and per-guess scoring
//!
//! `score(key, guess)` counts the members that would survive if `key` were
//! the secret and `guess` were played. Worst-case and average-case scores
//! fold that count over every member as key.
//!
//! All three are memoized per set. The pair cache computes each entry at
//! most once under concurrent access; the per-guess caches fan out through
//! rayon outside any lock and publish with insert-if-absent, so every caller
//! observes the first stored value.

use super::{CandidateSet, CandidateSetError};
use crate::core::{Matcher, Word};
use dashmap::DashMap;
use rayon::prelude::*;
use rustc_hash::FxBuildHasher;

/// Append-only memo tables of a [`CandidateSet`]
pub(crate) struct ScoreCache {
    pairs: DashMap<(Word, Word), usize, FxBuildHasher>,
    worst_case: DashMap<Word, usize, FxBuildHasher>,
    average_case: DashMap<Word, f64, FxBuildHasher>,
    #[cfg(test)]
    computed: std::sync::atomic::AtomicUsize,
}

impl Default for ScoreCache {
    fn default() -> Self {
        Self {
            pairs: DashMap::with_hasher(FxBuildHasher),
            worst_case: DashMap::with_hasher(FxBuildHasher),
            average_case: DashMap::with_hasher(FxBuildHasher),
            #[cfg(test)]
            computed: std::sync::atomic::AtomicUsize::new(0),
        }
    }
}

impl ScoreCache {
    #[cfg(test)]
    pub(crate) fn pair_entries(&self) -> usize {
        self.pairs.len()
    }

    /// Number of pair scores actually counted, cache hits excluded
    #[cfg(test)]
    pub(crate) fn computed(&self) -> usize {
        self.computed.load(std::sync::atomic::Ordering::SeqCst)
    }
}

impl CandidateSet {
    /// Number of members consistent with the feedback for (`key`, `guess`)
    ///
    /// The count includes `key` itself when it is a member. Words whose
    /// length differs from each other score 0.
    ///
    /// # Errors
    /// Returns `CandidateSetError::Empty` if the set has no members.
    ///
    /// # Examples
    /// ```
    /// use guesswork::core::Word;
    /// use guesswork::solver::CandidateSet;
    ///
    /// let words = ["rebus", "redux", "route", "hello"].map(|w| Word::new(w).unwrap());
    /// let set = CandidateSet::from_words(words).unwrap().unwrap();
    ///
    /// let key = Word::new("rebus").unwrap();
    /// let guess = Word::new("route").unwrap();
    /// assert_eq!(set.score(&key, &guess).unwrap(), 2);
    /// ```
    pub fn score(&self, key: &Word, guess: &Word) -> Result<usize, CandidateSetError> {
        self.ensure_non_empty()?;
        Ok(self.pair_score(key, guess))
    }

    /// Largest number of survivors for `guess` over every member as key
    ///
    /// # Errors
    /// Returns `CandidateSetError::Empty` if the set has no members.
    pub fn worst_case_score(&self, guess: &Word) -> Result<usize, CandidateSetError> {
        self.ensure_non_empty()?;
        Ok(self.worst_case(guess))
    }

    /// Mean number of survivors for `guess` over every member as key
    ///
    /// # Errors
    /// Returns `CandidateSetError::Empty` if the set has no members.
    pub fn average_case_score(&self, guess: &Word) -> Result<f64, CandidateSetError> {
        self.ensure_non_empty()?;
        Ok(self.average_case(guess))
    }

    pub(super) fn pair_score(&self, key: &Word, guess: &Word) -> usize {
        let cache_key = (key.clone(), guess.clone());

        if let Some(hit) = self.cache.pairs.get(&cache_key) {
            return *hit;
        }

        // Counting is sequential, so holding the shard lock here cannot
        // block a rayon worker on its own shard.
        *self
            .cache
            .pairs
            .entry(cache_key)
            .or_insert_with(|| self.count_survivors(key, guess))
    }

    pub(super) fn worst_case(&self, guess: &Word) -> usize {
        if let Some(hit) = self.cache.worst_case.get(guess) {
            return *hit;
        }

        let worst = self.scores_for(guess).into_iter().max().unwrap_or(0);

        *self
            .cache
            .worst_case
            .entry(guess.clone())
            .or_insert(worst)
    }

    pub(super) fn average_case(&self, guess: &Word) -> f64 {
        if let Some(hit) = self.cache.average_case.get(guess) {
            return *hit;
        }

        let scores = self.scores_for(guess);
        let average = if scores.is_empty() {
            0.0
        } else {
            scores.iter().sum::<usize>() as f64 / scores.len() as f64
        };

        *self
            .cache
            .average_case
            .entry(guess.clone())
            .or_insert(average)
    }

    /// Pair scores for `guess` against every member as key, in member order
    fn scores_for(&self, guess: &Word) -> Vec<usize> {
        if self.is_large() {
            self.words()
                .par_iter()
                .map(|key| self.pair_score(key, guess))
                .collect()
        } else {
            self.words()
                .iter()
                .map(|key| self.pair_score(key, guess))
                .collect()
        }
    }

    fn count_survivors(&self, key: &Word, guess: &Word) -> usize {
        log::trace!("Scoring key {key} against guess {guess}");
        #[cfg(test)]
        self.cache
            .computed
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);

        Matcher::of(key, guess).feedback().map_or(0, |feedback| {
            self.words()
                .iter()
                .filter(|word| feedback.accepts(word))
                .count()
        })
    }
}
