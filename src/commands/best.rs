//! Best guess command

use crate::core::Word;
use crate::solver::CandidateSet;
use anyhow::Result;

/// Best guesses of a candidate set under both criteria
pub struct BestResult {
    pub worst_case_guess: Word,
    pub worst_case_score: usize,
    pub average_case_guess: Word,
    pub average_case_score: f64,
    pub total_candidates: usize,
}

/// Find the best worst-case and average-case guesses of `set`
///
/// # Errors
///
/// Returns an error if the set has no members.
pub fn find_best(set: &CandidateSet) -> Result<BestResult> {
    let worst_case_guess = set.best_worst_case_guess()?.clone();
    let average_case_guess = set.best_average_case_guess()?.clone();

    Ok(BestResult {
        worst_case_score: set.worst_case_score(&worst_case_guess)?,
        average_case_score: set.average_case_score(&average_case_guess)?,
        worst_case_guess,
        average_case_guess,
        total_candidates: set.len(),
    })
}
