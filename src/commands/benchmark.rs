//! Benchmark command
//!
//! Plays a game for each of several secrets and aggregates the round counts.

use super::solve::{SolveConfig, solve_word};
use crate::core::Word;
use crate::solver::{CandidateSet, Criterion};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub criterion: Criterion,
    pub total_words: usize,
    pub total_rounds: usize,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    /// Solved games keyed by round count
    pub distribution: HashMap<usize, usize>,
    /// Secrets not solved within the round limit
    pub failures: Vec<Word>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Solve the first `count` members of `set` and aggregate the results
///
/// # Errors
///
/// Returns an error if any game fails to run.
pub fn run_benchmark(
    set: &CandidateSet,
    count: usize,
    criterion: Criterion,
    show_progress: bool,
) -> Result<BenchmarkResult> {
    let secrets: Vec<&Word> = set.iter().take(count).collect();

    let pb = if show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut total_rounds = 0;
    let mut min_rounds = usize::MAX;
    let mut max_rounds = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut failures = Vec::new();

    for secret in &secrets {
        let config =
            SolveConfig::new(Some(secret.text().to_string())).with_criterion(criterion);
        let result = solve_word(&config, set)?;
        let rounds = result.rounds.len();

        total_rounds += rounds;
        min_rounds = min_rounds.min(rounds);
        max_rounds = max_rounds.max(rounds);

        if result.is_solved() {
            *distribution.entry(rounds).or_insert(0) += 1;
        } else {
            log::debug!("Failed to solve {secret} in {rounds} rounds");
            failures.push((*secret).clone());
        }

        pb.set_message(secret.text().to_string());
        pb.inc(1);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_words = secrets.len();
    log::debug!("Benchmarked {total_words} words in {duration:?}");

    let (average_rounds, words_per_second) = if total_words == 0 {
        (0.0, 0.0)
    } else {
        (
            total_rounds as f64 / total_words as f64,
            total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
        )
    };

    Ok(BenchmarkResult {
        criterion,
        total_words,
        total_rounds,
        average_rounds,
        min_rounds: if total_words == 0 { 0 } else { min_rounds },
        max_rounds,
        distribution,
        failures,
        duration,
        words_per_second,
    })
}
