//! Formatting utilities for terminal output

use crate::core::{Feedback, Hint, Word};
use colored::Colorize;

/// Render a guess with each letter coloured by its feedback
#[must_use]
pub fn colorize_guess(guess: &Word, hint: &Hint) -> String {
    guess
        .text()
        .to_uppercase()
        .chars()
        .zip(hint.feedback())
        .map(|(letter, feedback)| {
            let letter = letter.to_string();
            match feedback {
                Feedback::Correct => letter.bright_green().bold().to_string(),
                Feedback::Present => letter.bright_yellow().bold().to_string(),
                Feedback::Absent => letter.bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
