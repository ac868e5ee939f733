//! Word analysis command
//!
//! Scores a single guess against a candidate set under both criteria.

use crate::core::Word;
use crate::solver::CandidateSet;
use anyhow::{Result, bail};

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Word,
    pub worst_case: usize,
    pub average_case: f64,
    pub total_candidates: usize,
    /// Whether the guess could itself be the secret
    pub is_candidate: bool,
}

impl AnalysisResult {
    /// Share of candidates the guess is expected to rule out
    #[must_use]
    pub fn expected_elimination(&self) -> f64 {
        1.0 - self.average_case / self.total_candidates as f64
    }
}

/// Analyze `guess` against `set`
///
/// The guess does not have to be a member, but it must have the set's word
/// length.
///
/// # Errors
///
/// Returns an error if:
/// - The guess is not a valid word
/// - The guess length differs from the set's word length
pub fn analyze_word(guess: &str, set: &CandidateSet) -> Result<AnalysisResult> {
    let guess = Word::new(guess.to_lowercase())?;

    if guess.len() != set.word_length() {
        bail!(
            "Guess '{guess}' has {} letters, the word list has {}",
            guess.len(),
            set.word_length()
        );
    }

    let worst_case = set.worst_case_score(&guess)?;
    let average_case = set.average_case_score(&guess)?;
    log::debug!("Analyzed {guess}: worst {worst_case}, average {average_case:.3}");

    Ok(AnalysisResult {
        is_candidate: set.contains(&guess),
        total_candidates: set.len(),
        guess,
        worst_case,
        average_case,
    })
}
