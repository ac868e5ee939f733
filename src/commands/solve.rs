//! Game solving command
//!
//! Plays a game against a secret word: each round picks the best guess under
//! a criterion, derives feedback, and narrows the candidates with the
//! accumulated constraint.

use crate::core::{Constraint, Feedback, Matcher, Word};
use crate::solver::{CandidateSet, Criterion, RoundState};
use anyhow::{Result, anyhow, bail};
use rand::prelude::IndexedRandom;

/// Configuration for solving a word
pub struct SolveConfig {
    /// Secret to play against; a random candidate when `None`
    pub secret: Option<String>,
    pub max_rounds: usize,
    pub criterion: Criterion,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: Option<String>) -> Self {
        Self {
            secret,
            max_rounds: 10,
            criterion: Criterion::WorstCase,
        }
    }

    #[must_use]
    pub const fn with_criterion(mut self, criterion: Criterion) -> Self {
        self.criterion = criterion;
        self
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub secret: Word,
    pub criterion: Criterion,
    pub rounds: Vec<RoundStep>,
    pub outcome: Outcome,
    /// Conjunction of every round's feedback
    pub accumulated: Option<Constraint>,
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved,
    /// Feedback ruled out every candidate
    Exhausted,
    /// Ran out of rounds
    OutOfRounds,
}

/// A single round of the game
pub struct RoundStep {
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

impl SolveResult {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.outcome == Outcome::Solved
    }
}

/// Solve a game over `set` using the configured criterion
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not a valid word or not a member of `set`
/// - A best-guess search fails on an empty set
pub fn solve_word(config: &SolveConfig, set: &CandidateSet) -> Result<SolveResult> {
    let secret = choose_secret(config.secret.as_deref(), set)?;
    log::debug!(
        "Solving with {} candidates using the {} criterion",
        set.len(),
        config.criterion
    );

    let mut state = RoundState::start(set.clone());
    let mut accumulated: Option<Constraint> = None;
    let mut rounds = Vec::new();

    let outcome = loop {
        if rounds.len() >= config.max_rounds {
            break Outcome::OutOfRounds;
        }

        let candidates_before = state.remaining();
        let guess = match &state {
            RoundState::Active(candidates) => config.criterion.best_guess(candidates)?.clone(),
            RoundState::Resolved(only) => only.clone(),
            RoundState::Exhausted => break Outcome::Exhausted,
        };

        let feedback = Matcher::of(&secret, &guess)
            .feedback()
            .ok_or_else(|| anyhow!("Guess '{guess}' does not match the secret's length"))?;
        let round_constraint = feedback.to_constraint();

        accumulated = Some(match accumulated {
            Some(previous) => previous.and(Some(&round_constraint)),
            None => round_constraint,
        });

        let solved = feedback.is_solved();
        if !solved && let Some(constraint) = &accumulated {
            state = state.advance(constraint);
        }

        let candidates_after = if solved { 1 } else { state.remaining() };
        log::debug!(
            "Round {}: {guess} {} ({candidates_before} -> {candidates_after})",
            rounds.len() + 1,
            feedback.to_emoji()
        );

        rounds.push(RoundStep {
            guess,
            feedback,
            candidates_before,
            candidates_after,
        });

        if solved {
            break Outcome::Solved;
        }
    };

    Ok(SolveResult {
        secret,
        criterion: config.criterion,
        rounds,
        outcome,
        accumulated,
    })
}

fn choose_secret(requested: Option<&str>, set: &CandidateSet) -> Result<Word> {
    let secret = match requested {
        Some(text) => Word::new(text.to_lowercase())?,
        None => set
            .words()
            .choose(&mut rand::rng())
            .cloned()
            .ok_or_else(|| anyhow!("No candidates to draw a secret from"))?,
    };

    if !set.contains(&secret) {
        bail!("Secret '{secret}' is not in the word list");
    }

    Ok(secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{default_candidate_set, loader::words_from_slice};

    fn crane_family() -> CandidateSet {
        CandidateSet::from_words(words_from_slice(&[
            "crane", "slate", "irate", "crate", "grate", "trace",
        ]))
        .unwrap()
        .unwrap()
    }

    #[test]
    fn solves_every_default_secret() {
        let set = default_candidate_set().unwrap();
        for secret in ["rebus", "redux", "route", "hello"] {
            let config = SolveConfig::new(Some(secret.to_string()));
            let result = solve_word(&config, &set).unwrap();

            assert!(result.is_solved(), "{secret}");
            assert_eq!(result.rounds.last().unwrap().guess.text(), secret);
        }
    }

    #[test]
    fn first_guess_is_best_worst_case() {
        let set = default_candidate_set().unwrap();
        let config = SolveConfig::new(Some("hello".to_string()));
        let result = solve_word(&config, &set).unwrap();

        // rebus narrows "hello" down to itself, which is then guessed
        assert_eq!(result.rounds[0].guess.text(), "rebus");
        assert_eq!(result.rounds[0].candidates_after, 1);
        assert_eq!(result.rounds.len(), 2);
    }

    #[test]
    fn candidates_never_grow() {
        let set = crane_family();
        for secret in set.words() {
            let config = SolveConfig::new(Some(secret.text().to_string()))
                .with_criterion(Criterion::AverageCase);
            let result = solve_word(&config, &set).unwrap();

            assert!(result.is_solved());
            for step in &result.rounds {
                assert!(step.candidates_after <= step.candidates_before);
            }
        }
    }

    #[test]
    fn accumulated_constraint_keeps_secret() {
        let set = crane_family();
        let config = SolveConfig::new(Some("grate".to_string()));
        let result = solve_word(&config, &set).unwrap();

        let accumulated = result.accumulated.unwrap();
        assert!(accumulated.test(&result.secret));
        assert!(accumulated.pattern().starts_with("Correct: "));
    }

    #[test]
    fn respects_max_rounds() {
        let set = crane_family();
        let mut config = SolveConfig::new(Some("trace".to_string()));
        config.max_rounds = 1;

        let result = solve_word(&config, &set).unwrap();
        assert!(result.rounds.len() <= 1);
        if !result.is_solved() {
            assert_eq!(result.outcome, Outcome::OutOfRounds);
        }
    }

    #[test]
    fn random_secret_is_a_member() {
        let set = crane_family();
        let result = solve_word(&SolveConfig::new(None), &set).unwrap();
        assert!(set.contains(&result.secret));
    }

    #[test]
    fn unknown_secret_is_rejected() {
        let set = default_candidate_set().unwrap();
        let config = SolveConfig::new(Some("zzzzz".to_string()));
        assert!(solve_word(&config, &set).is_err());
    }

    #[test]
    fn uppercase_secret_is_normalized() {
        let set = default_candidate_set().unwrap();
        let config = SolveConfig::new(Some("ROUTE".to_string()));
        assert!(solve_word(&config, &set).unwrap().is_solved());
    }
}
