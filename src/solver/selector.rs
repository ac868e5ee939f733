//! Best-guess search over a candidate set
//!
//! Every member is scored by a criterion and the smallest score wins. Ties go
//! to the first member in lexicographic order, so results are reproducible.

use super::{CandidateSet, CandidateSetError};
use crate::core::Word;
use rayon::prelude::*;
use std::time::Instant;

impl CandidateSet {
    /// Select the member minimizing `criterion`
    ///
    /// The criterion runs on every member, in parallel for large sets. A
    /// member only replaces the current best when its score is strictly
    /// smaller, so an incomparable score (such as NaN) never displaces it.
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
    /// // Fewest distinct letters first
    /// let best = set
    ///     .best_guess(|w| w.text().chars().collect::<std::collections::HashSet<_>>().len())
    ///     .unwrap();
    /// assert_eq!(best.text(), "hello");
    /// ```
    pub fn best_guess<F, S>(&self, criterion: F) -> Result<&Word, CandidateSetError>
    where
        F: Fn(&Word) -> S + Sync,
        S: PartialOrd + Send,
    {
        self.ensure_non_empty()?;

        let scores: Vec<S> = if self.is_large() {
            self.words().par_iter().map(|w| criterion(w)).collect()
        } else {
            self.words().iter().map(|w| criterion(w)).collect()
        };

        let mut best = 0;
        for (i, score) in scores.iter().enumerate().skip(1) {
            if *score < scores[best] {
                best = i;
            }
        }

        Ok(&self.words()[best])
    }

    /// Member with the smallest worst-case score
    ///
    /// # Errors
    /// Returns `CandidateSetError::Empty` if the set has no members.
    pub fn best_worst_case_guess(&self) -> Result<&Word, CandidateSetError> {
        let start = Instant::now();
        let best = self.best_guess(|guess| self.worst_case(guess))?;

        log::debug!(
            "Best worst-case guess among {} candidates: {best} in {:.2?}",
            self.len(),
            start.elapsed()
        );
        Ok(best)
    }

    /// Member with the smallest average-case score
    ///
    /// # Errors
    /// Returns `CandidateSetError::Empty` if the set has no members.
    pub fn best_average_case_guess(&self) -> Result<&Word, CandidateSetError> {
        let start = Instant::now();
        let best = self.best_guess(|guess| self.average_case(guess))?;

        log::debug!(
            "Best average-case guess among {} candidates: {best} in {:.2?}",
            self.len(),
            start.elapsed()
        );
        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn set_of(texts: &[&str]) -> CandidateSet {
        CandidateSet::from_words(texts.iter().map(|t| word(t)))
            .unwrap()
            .unwrap()
    }

    #[test]
    fn best_worst_case_breaks_ties_lexicographically() {
        // rebus and redux both have worst case 1
        let set = set_of(&["route", "redux", "rebus", "hello"]);
        assert_eq!(set.best_worst_case_guess().unwrap().text(), "rebus");
    }

    #[test]
    fn best_average_case_breaks_ties_lexicographically() {
        let set = set_of(&["route", "redux", "rebus", "hello"]);
        assert_eq!(set.best_average_case_guess().unwrap().text(), "rebus");
    }

    #[test]
    fn best_worst_case_is_minimal() {
        let set = set_of(&["crane", "slate", "irate", "crate", "grate", "trace"]);
        let best = set.best_worst_case_guess().unwrap();
        let best_score = set.worst_case_score(best).unwrap();

        for guess in set.words() {
            assert!(best_score <= set.worst_case_score(guess).unwrap());
        }
        assert_eq!(best.text(), "crane");
    }

    #[test]
    fn best_average_case_is_minimal() {
        let set = set_of(&["crane", "slate", "irate", "crate", "grate", "trace"]);
        let best = set.best_average_case_guess().unwrap();
        let best_score = set.average_case_score(best).unwrap();

        for guess in set.words() {
            assert!(best_score <= set.average_case_score(guess).unwrap());
        }
    }

    #[test]
    fn custom_criterion_agrees_with_worst_case() {
        let set = set_of(&["rebus", "redux", "route", "hello"]);
        let custom = set
            .best_guess(|g| set.worst_case_score(g).unwrap_or(usize::MAX))
            .unwrap();
        let builtin = set.best_worst_case_guess().unwrap();

        assert_eq!(
            set.worst_case_score(custom).unwrap(),
            set.worst_case_score(builtin).unwrap()
        );
    }

    #[test]
    fn custom_criterion_picks_first_minimum() {
        let set = set_of(&["bbb", "aaa", "ccc"]);
        assert_eq!(set.best_guess(|_| 7).unwrap().text(), "aaa");
        assert_eq!(
            set.best_guess(|w| if w.text() == "ccc" { 0 } else { 1 })
                .unwrap()
                .text(),
            "ccc"
        );
    }

    #[test]
    fn nan_scores_never_displace_best() {
        let set = set_of(&["aaa", "bbb", "ccc"]);
        let best = set
            .best_guess(|w| if w.text() == "bbb" { 1.0 } else { f64::NAN })
            .unwrap();
        // Every comparison against the leading NaN is false
        assert_eq!(best.text(), "aaa");
    }

    #[test]
    fn single_member_is_its_own_best() {
        let set = set_of(&["hello"]);
        assert_eq!(set.best_worst_case_guess().unwrap().text(), "hello");
        assert_eq!(set.worst_case_score(&word("hello")).unwrap(), 1);
    }

    #[test]
    fn large_set_selection_is_deterministic() {
        let letters = ['a', 'b', 'c', 'd', 'e'];
        let mut texts = Vec::new();
        for &x in &letters {
            for &y in &letters {
                for &z in &letters {
                    texts.push(format!("{x}{y}{z}"));
                }
            }
        }
        let set = CandidateSet::from_words(texts.iter().map(|t| word(t)))
            .unwrap()
            .unwrap();

        let first = set.best_worst_case_guess().unwrap().clone();
        let second = set.best_worst_case_guess().unwrap().clone();
        assert_eq!(first, second);

        let fresh = set.clone();
        assert_eq!(fresh.best_worst_case_guess().unwrap(), &first);
    }
}
