//! Named, composable predicates over words
//!
//! A [`Constraint`] pairs an executable test with a human-readable pattern.
//! Constraints are immutable values: combining or renaming one always yields
//! a new constraint and leaves the receiver untouched.

use super::Word;
use std::fmt;
use std::sync::{Arc, LazyLock};

type Predicate = dyn Fn(&Word) -> bool + Send + Sync;

/// Placeholder rendered when a constraint has no pattern
const UNNAMED: &str = "Constraint[]";

static NEVER: LazyLock<Constraint> = LazyLock::new(|| Constraint::described(|_| false, "FALSE"));

/// A boolean test over a [`Word`] with a display pattern
#[derive(Clone)]
pub struct Constraint {
    predicate: Arc<Predicate>,
    pattern: String,
}

impl Constraint {
    /// Create a constraint with an empty pattern
    ///
    /// # Examples
    /// ```
    /// use guesswork::core::{Constraint, Word};
    ///
    /// let short = Constraint::new(|w: &Word| w.len() < 4);
    /// assert!(short.test(&Word::new("abc").unwrap()));
    /// assert!(!short.test(&Word::new("abcd").unwrap()));
    /// ```
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Word) -> bool + Send + Sync + 'static,
    {
        Self::described(predicate, "")
    }

    /// Create a constraint with a display pattern
    pub fn described<F>(predicate: F, pattern: impl Into<String>) -> Self
    where
        F: Fn(&Word) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            pattern: pattern.into(),
        }
    }

    /// The shared constraint that rejects every word
    ///
    /// Used for feedback that no word can satisfy, such as comparing words
    /// of different lengths.
    #[must_use]
    pub fn never() -> Self {
        NEVER.clone()
    }

    /// Evaluate the constraint against a word
    #[inline]
    #[must_use]
    pub fn test(&self, word: &Word) -> bool {
        (self.predicate)(word)
    }

    /// Logical AND with another constraint
    ///
    /// Returns a clone of `self` when `other` is `None`. Patterns are joined
    /// with `" AND "`, skipping empty ones.
    ///
    /// # Examples
    /// ```
    /// use guesswork::core::{Constraint, Word};
    ///
    /// let starts = Constraint::described(|w: &Word| w.matches_at(0, 'r'), "starts with r");
    /// let ends = Constraint::described(|w: &Word| w.matches_at(4, 's'), "ends with s");
    /// let both = starts.and(Some(&ends));
    ///
    /// assert_eq!(both.to_string(), "starts with r AND ends with s");
    /// assert!(both.test(&Word::new("rebus").unwrap()));
    /// assert!(!both.test(&Word::new("route").unwrap()));
    /// ```
    #[must_use]
    pub fn and(&self, other: Option<&Self>) -> Self {
        let Some(other) = other else {
            return self.clone();
        };

        let pattern = match (self.pattern.is_empty(), other.pattern.is_empty()) {
            (false, false) => format!("{} AND {}", self.pattern, other.pattern),
            (true, false) => other.pattern.clone(),
            _ => self.pattern.clone(),
        };

        let left = Arc::clone(&self.predicate);
        let right = Arc::clone(&other.predicate);

        Self {
            predicate: Arc::new(move |word: &Word| left(word) && right(word)),
            pattern,
        }
    }

    /// Same test, different pattern
    #[must_use]
    pub fn with_pattern(&self, pattern: impl Into<String>) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            pattern: pattern.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether both constraints run the very same predicate
    #[cfg(test)]
    pub(crate) fn shares_test_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.predicate, &other.predicate)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pattern.is_empty() {
            f.write_str(UNNAMED)
        } else {
            f.write_str(&self.pattern)
        }
    }
}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn constraint_new_evaluates_predicate() {
        let always = Constraint::new(|_| true);
        let none = Constraint::new(|_| false);
        let specific = Constraint::new(|w: &Word| w.text() == "apple");

        assert!(always.test(&word("apple")));
        assert!(!none.test(&word("apple")));
        assert!(specific.test(&word("apple")));
        assert!(!specific.test(&word("hello")));
    }

    #[test]
    fn never_rejects_everything() {
        let never = Constraint::never();
        assert!(!never.test(&word("apple")));
        assert!(!never.test(&word("")));
        assert_eq!(never.to_string(), "FALSE");
        assert!(never.shares_test_with(&Constraint::never()));
    }

    #[test]
    fn and_with_none_is_identity() {
        let c = Constraint::described(|w: &Word| w.len() == 3, "len 3");
        let same = c.and(None);

        assert!(same.shares_test_with(&c));
        assert_eq!(same.pattern(), c.pattern());
    }

    #[test]
    fn and_combines_tests() {
        let has_a = Constraint::new(|w: &Word| w.contains('a'));
        let has_b = Constraint::new(|w: &Word| w.contains('b'));
        let both = has_a.and(Some(&has_b));

        assert!(both.test(&word("ab")));
        assert!(!both.test(&word("aa")));
        assert!(!both.test(&word("bb")));
    }

    #[test]
    fn and_joins_patterns_skipping_empty() {
        let named_a = Constraint::described(|_| true, "A");
        let named_b = Constraint::described(|_| true, "B");
        let unnamed = Constraint::new(|_| true);

        assert_eq!(named_a.and(Some(&named_b)).pattern(), "A AND B");
        assert_eq!(unnamed.and(Some(&named_b)).pattern(), "B");
        assert_eq!(named_a.and(Some(&unnamed)).pattern(), "A");
        assert_eq!(unnamed.and(Some(&unnamed)).pattern(), "");
    }

    #[test]
    fn with_pattern_keeps_test_and_receiver() {
        let c = Constraint::new(|w: &Word| w.len() == 3);
        let renamed = c.with_pattern("Size is 3");

        assert_eq!(renamed.pattern(), "Size is 3");
        assert_eq!(c.pattern(), "");
        assert!(renamed.test(&word("abc")));
        assert!(!renamed.test(&word("abcd")));
    }

    #[test]
    fn display_uses_placeholder_when_unnamed() {
        assert_eq!(Constraint::new(|_| true).to_string(), "Constraint[]");
        assert_eq!(
            Constraint::described(|_| true, "Correct: a____").to_string(),
            "Correct: a____"
        );
    }

    #[test]
    fn constraint_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Constraint>();
    }
}
