//! Word list loading utilities
//!
//! Provides functions to load word lists from files or convert string slices.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// One word per line. Lines are trimmed and lowercased; blank lines are
/// skipped. With `word_length` set, only words of exactly that many
/// characters are kept.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use guesswork::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt", Some(5)).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: Option<usize>) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_words(&content, word_length);

    log::debug!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse newline-separated words
#[must_use]
pub fn parse_words(content: &str, word_length: Option<usize>) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .filter(|line| word_length.is_none_or(|len| line.chars().count() == len))
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Convert string slice to Word vector
///
/// Entries that are not valid words are skipped.
///
/// # Examples
/// ```
/// use guesswork::wordlists::loader::words_from_slice;
/// use guesswork::wordlists::DEFAULT_WORDS;
///
/// let words = words_from_slice(DEFAULT_WORDS);
/// assert_eq!(words.len(), DEFAULT_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
