//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::BenchmarkResult;
use crate::solver::{SolveOutcome, SolveReport};
use colored::Colorize;

/// Print the summary line of a finished game
pub fn print_solve_report(report: &SolveReport) {
    println!();
    if !report.rejected.is_empty() {
        let rejected: Vec<String> = report
            .rejected
            .iter()
            .map(|w| w.text().to_uppercase())
            .collect();
        println!("Rejected by the game: {}", rejected.join(", ").yellow());
    }

    match report.outcome {
        SolveOutcome::Solved => println!(
            "{}",
            format!(
                "✅ Solved in {} {}!",
                report.attempts(),
                if report.attempts() == 1 { "guess" } else { "guesses" }
            )
            .green()
            .bold()
        ),
        SolveOutcome::OutOfAttempts => println!(
            "{}",
            format!("❌ Ran out of attempts after {} guesses", report.attempts())
                .red()
                .bold()
        ),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", format!("{}", result.solved).green());
    if result.out_of_attempts > 0 {
        println!(
            "   Out of attempts:  {}",
            format!("{}", result.out_of_attempts).yellow()
        );
    }
    if result.no_candidates > 0 {
        println!(
            "   No candidates:    {}",
            format!("{}", result.no_candidates).red().bold()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Worst case:       {}", result.max_guesses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut counts: Vec<(usize, usize)> = result
        .distribution
        .iter()
        .map(|(&guesses, &count)| (guesses, count))
        .collect();
    counts.sort_unstable();
    for (guesses, count) in counts {
        let pct = if result.solved > 0 {
            count as f64 / result.solved as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guesses:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
