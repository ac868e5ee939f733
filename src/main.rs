//! Guesswork - CLI
//!
//! Solves, analyzes and benchmarks guessing games over a word list using
//! worst-case or average-case guess selection.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use guesswork::{
    commands::{SolveConfig, analyze_word, find_best, run_benchmark, solve_word},
    logging::init_logger,
    output::{print_analysis_result, print_benchmark_result, print_best_result, print_solve_result},
    solver::{CandidateSet, Criterion},
    wordlists::{default_candidate_set, load_candidate_set},
};

#[derive(Parser)]
#[command(
    name = "guesswork",
    about = "Guessing-game solver using worst-case and average-case guess selection",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Criterion: worst (default) or average
    #[arg(short, long, global = true, default_value = "worst")]
    criterion: String,

    /// Path to a word list, one word per line (default: built-in corpus)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Keep only words of this length from the word list
    #[arg(short = 'l', long, global = true)]
    length: Option<usize>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against a secret word
    Solve {
        /// The secret to solve (default: a random word from the list)
        secret: Option<String>,

        /// Show verbose output with candidate counts and feedback
        #[arg(short, long)]
        verbose: bool,

        /// Give up after this many rounds
        #[arg(short = 'r', long, default_value = "10")]
        max_rounds: usize,
    },

    /// Score a guess against the word list
    Analyze {
        /// Guess to analyze
        guess: String,
    },

    /// Show the best worst-case and average-case guesses
    Best,

    /// Benchmark solver performance
    Benchmark {
        /// Number of words from the list to play
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

/// Load the candidate set based on the -w and -l flags
///
/// Without `--length`, a word list mixing lengths is an error.
fn load_candidates(wordlist: Option<&str>, length: Option<usize>) -> Result<CandidateSet> {
    let Some(path) = wordlist else {
        return Ok(default_candidate_set()?);
    };

    let set = load_candidate_set(path, length)
        .with_context(|| format!("Could not build a candidate set from {path}"))?;
    log::info!("Loaded {} words from {path}", set.len());
    Ok(set)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.debug);

    let criterion = Criterion::from_name(&cli.criterion);
    let set = load_candidates(cli.wordlist.as_deref(), cli.length)?;

    match cli.command {
        Commands::Solve {
            secret,
            verbose,
            max_rounds,
        } => {
            let mut config = SolveConfig::new(secret).with_criterion(criterion);
            config.max_rounds = max_rounds;
            let result = solve_word(&config, &set)?;
            print_solve_result(&result, verbose);
        }
        Commands::Analyze { guess } => {
            let result = analyze_word(&guess, &set)?;
            print_analysis_result(&result);
        }
        Commands::Best => {
            let result = find_best(&set)?;
            print_best_result(&result);
        }
        Commands::Benchmark { count } => {
            println!(
                "Running benchmark on {} words...",
                count.min(set.len())
            );
            let result = run_benchmark(&set, count, criterion, true)?;
            print_benchmark_result(&result);
        }
    }

    Ok(())
}
