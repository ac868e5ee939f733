//! Formatting utilities for terminal output

use crate::core::Feedback;

/// Format feedback as the guess letters next to their marks
#[must_use]
pub fn feedback_line(guess: &str, feedback: &Feedback) -> String {
    format!("{} {}", guess.to_uppercase(), feedback.to_emoji())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Clamped to [0, width] before the cast
        ((value / max).clamp(0.0, 1.0) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how much of the candidate set a score leaves standing
#[must_use]
pub fn survivor_bar(score: f64, total: usize, width: usize) -> String {
    create_progress_bar(score, total as f64, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Matcher, Word};

    #[test]
    fn feedback_line_uppercases_guess() {
        let key = Word::new("crane").unwrap();
        let guess = Word::new("crane").unwrap();
        let feedback = Matcher::of(&key, &guess).feedback().unwrap();

        assert_eq!(feedback_line("crane", &feedback), "CRANE 🟩🟩🟩🟩🟩");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn survivor_bar_scales_to_total() {
        assert_eq!(survivor_bar(2.0, 4, 8), "████░░░░");
    }
}
