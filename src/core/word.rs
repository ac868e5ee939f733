//! Word representation
//!
//! A Word is an immutable, fixed-length character sequence with O(1) membership
//! lookup. Words are cheap to clone: the characters live behind an `Arc`, so
//! candidate sets and score caches can hold them freely across threads.

use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::str::FromStr;
use std::sync::Arc;

/// Character that may never appear inside a word
pub const NULL_CHAR: char = '\0';

/// An immutable word with positional character access
#[derive(Clone)]
pub struct Word(Arc<Letters>);

struct Letters {
    text: String,
    chars: Box<[char]>,
    charset: FxHashSet<char>,
}

/// Error type for invalid words and out-of-range access
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("Null character found at index: {index}")]
    NullCharacter { index: usize },

    #[error("Index {index} out of bounds for word of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// A character paired with its position in a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexedChar {
    pub index: usize,
    pub character: char,
}

impl IndexedChar {
    #[must_use]
    pub const fn new(index: usize, character: char) -> Self {
        Self { index, character }
    }
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError::NullCharacter` if the text contains `'\0'`.
    ///
    /// # Examples
    /// ```
    /// use guesswork::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("cr\0ne").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        Self::from_chars(text.as_ref().chars())
    }

    /// Create a new Word from a sequence of characters
    ///
    /// # Errors
    /// Returns `WordError::NullCharacter` naming the first offending index.
    pub fn from_chars<I>(chars: I) -> Result<Self, WordError>
    where
        I: IntoIterator<Item = char>,
    {
        let chars: Box<[char]> = chars.into_iter().collect();

        if let Some(index) = chars.iter().position(|&c| c == NULL_CHAR) {
            return Err(WordError::NullCharacter { index });
        }

        let text: String = chars.iter().collect();
        let charset = chars.iter().copied().collect();

        Ok(Self(Arc::new(Letters {
            text,
            chars,
            charset,
        })))
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0.text
    }

    /// Get the word as a character slice
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.0.chars
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.chars.is_empty()
    }

    /// Get the character at a specific position
    ///
    /// # Errors
    /// Returns `WordError::IndexOutOfBounds` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<char, WordError> {
        self.0
            .chars
            .get(index)
            .copied()
            .ok_or(WordError::IndexOutOfBounds {
                index,
                len: self.len(),
            })
    }

    /// Check if the word contains a character anywhere
    #[inline]
    #[must_use]
    pub fn contains(&self, character: char) -> bool {
        self.0.charset.contains(&character)
    }

    /// Check if `character` sits exactly at `position`
    ///
    /// Out-of-range positions never match.
    #[inline]
    #[must_use]
    pub fn matches_at(&self, position: usize, character: char) -> bool {
        self.0.chars.get(position) == Some(&character)
    }

    /// Check if `character` occurs in the word but not at `position`
    #[inline]
    #[must_use]
    pub fn contains_elsewhere(&self, position: usize, character: char) -> bool {
        self.contains(character) && !self.matches_at(position, character)
    }

    /// Iterate over (position, character) pairs in order
    ///
    /// Each call starts a fresh pass over the word.
    #[must_use]
    pub fn positions(&self) -> Positions<'_> {
        Positions {
            chars: &self.0.chars,
            index: 0,
        }
    }

    /// Count the occurrences of each character
    #[cfg(test)]
    pub(crate) fn char_counts(&self) -> rustc_hash::FxHashMap<char, usize> {
        let mut counts = rustc_hash::FxHashMap::default();
        for &c in self.chars() {
            *counts.entry(c).or_insert(0) += 1;
        }
        counts
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.chars == other.0.chars
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.chars.hash(state);
    }
}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.chars.cmp(&other.0.chars)
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Word").field(&self.0.text).finish()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.text)
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Iterator over the indexed characters of a [`Word`]
#[derive(Debug, Clone)]
pub struct Positions<'a> {
    chars: &'a [char],
    index: usize,
}

impl Iterator for Positions<'_> {
    type Item = IndexedChar;

    fn next(&mut self) -> Option<Self::Item> {
        let character = *self.chars.get(self.index)?;
        let item = IndexedChar::new(self.index, character);
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.chars.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Positions<'_> {}

impl FusedIterator for Positions<'_> {}

impl<'a> IntoIterator for &'a Word {
    type Item = IndexedChar;
    type IntoIter = Positions<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions()
    }
}
