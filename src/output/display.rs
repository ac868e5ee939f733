//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_line, survivor_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, BestResult, Outcome, SolveResult};
use colored::Colorize;

fn print_header(title: &str, subject: Option<&str>) {
    println!("\n{}", "═".repeat(60).cyan());
    match subject {
        Some(subject) => println!(
            " {} {} ",
            title.bright_cyan().bold(),
            subject.to_uppercase().bright_yellow().bold()
        ),
        None => println!(" {} ", title.bright_cyan().bold()),
    }
    println!("{}", "═".repeat(60).cyan());
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} ({} criterion)",
        result.secret.text().to_uppercase().bright_yellow().bold(),
        result.criterion
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.rounds.iter().enumerate() {
        println!(
            "\nRound {}: {}",
            i + 1,
            feedback_line(step.guess.text(), &step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Feedback:   {}", step.feedback.describe().dimmed());
        }
    }

    if verbose && let Some(accumulated) = &result.accumulated {
        println!("\n  Accumulated: {}", accumulated.pattern().dimmed());
    }

    println!();
    let rounds = result.rounds.len();
    match result.outcome {
        Outcome::Solved => println!(
            "{}",
            format!("✅ Solved in {rounds} rounds!").green().bold()
        ),
        Outcome::Exhausted => println!(
            "{}",
            format!("❌ No candidates left after {rounds} rounds")
                .red()
                .bold()
        ),
        Outcome::OutOfRounds => println!(
            "{}",
            format!("❌ Failed to solve in {rounds} rounds").red().bold()
        ),
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    print_header("GUESS ANALYSIS:", Some(result.guess.text()));

    let total = result.total_candidates;
    println!("\n📊 Against {total} candidates:");
    println!(
        "   Worst case:   [{}] {}",
        survivor_bar(result.worst_case as f64, total, 30).yellow(),
        format!("{} remain", result.worst_case).bright_yellow()
    );
    println!(
        "   Average case: [{}] {}",
        survivor_bar(result.average_case, total, 30).green(),
        format!("{:.3} remain", result.average_case).bright_yellow()
    );
    println!(
        "   Eliminates:   {:.1}% on average",
        result.expected_elimination() * 100.0
    );
    if result.is_candidate {
        println!("   {}", "Could be the secret".green());
    } else {
        println!("   {}", "Not a candidate".bright_black());
    }
}

/// Print the best guesses of a candidate set
pub fn print_best_result(result: &BestResult) {
    print_header("BEST GUESSES", None);

    println!("\n📊 Among {} candidates:", result.total_candidates);
    println!(
        "   Worst case:   {} ({} remain at most)",
        result
            .worst_case_guess
            .text()
            .to_uppercase()
            .bright_yellow()
            .bold(),
        result.worst_case_score
    );
    println!(
        "   Average case: {} ({:.3} remain on average)",
        result
            .average_case_guess
            .text()
            .to_uppercase()
            .bright_yellow()
            .bold(),
        result.average_case_score
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    print_header("BENCHMARK RESULTS", None);

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Criterion:        {}", result.criterion);
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Average rounds:   {}",
        format!("{:.2}", result.average_rounds)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_rounds).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_rounds).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        let mut counts: Vec<_> = result.distribution.iter().collect();
        counts.sort_unstable();
        for (rounds, &count) in counts {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {rounds:2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.failures.is_empty() {
        println!("\n{}", "Failures:".red().bold());
        for word in &result.failures {
            println!("   {}", word.text().to_uppercase());
        }
    }
}
