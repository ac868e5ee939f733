//! Word lists for candidate sets
//!
//! Provides a small built-in corpus and helpers to turn loaded words into a
//! [`CandidateSet`], falling back to the built-in corpus when nothing usable
//! was loaded.

pub mod loader;

use crate::core::Word;
use crate::solver::{CandidateSet, CandidateSetError};
use std::io;
use std::path::Path;

/// Errors raised while turning a word list file into a candidate set
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("Failed to read word list: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    CandidateSet(#[from] CandidateSetError),
}

/// Built-in fallback corpus
pub const DEFAULT_WORDS: &[&str] = &["rebus", "redux", "route", "hello"];

/// The built-in corpus as a candidate set
///
/// # Errors
/// Never fails for the built-in words; the error type is shared with
/// [`candidate_set_or_default`].
pub fn default_candidate_set() -> Result<CandidateSet, CandidateSetError> {
    CandidateSet::from_words(loader::words_from_slice(DEFAULT_WORDS))?
        .ok_or(CandidateSetError::Empty)
}

/// Build a candidate set from `words`, or the built-in corpus if `words` is empty
///
/// # Errors
/// Returns `CandidateSetError::InconsistentWordLength` if `words` mixes lengths.
///
/// # Examples
/// ```
/// use guesswork::wordlists::{DEFAULT_WORDS, candidate_set_or_default};
///
/// let set = candidate_set_or_default(Vec::new()).unwrap();
/// assert_eq!(set.len(), DEFAULT_WORDS.len());
/// ```
pub fn candidate_set_or_default(words: Vec<Word>) -> Result<CandidateSet, CandidateSetError> {
    match CandidateSet::from_words(words)? {
        Some(set) => Ok(set),
        None => {
            log::info!("No words loaded, using the built-in corpus");
            default_candidate_set()
        }
    }
}

/// Load a word list file into a candidate set
///
/// With `word_length` set, lines of any other length are dropped before the
/// set is built. Without it every line is kept, so a file mixing lengths
/// is rejected. A file with no usable words falls back to the built-in
/// corpus.
///
/// # Errors
/// Returns `WordListError::Io` if the file cannot be read, or
/// `WordListError::CandidateSet` if the kept words mix lengths.
pub fn load_candidate_set<P: AsRef<Path>>(
    path: P,
    word_length: Option<usize>,
) -> Result<CandidateSet, WordListError> {
    let words = loader::load_from_file(path, word_length)?;
    Ok(candidate_set_or_default(words)?)
}
