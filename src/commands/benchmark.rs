//! Benchmark command
//!
//! Runs the solver against many known solutions in parallel.

use crate::core::Word;
use crate::solver::{SolveError, SolveOutcome, Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub out_of_attempts: usize,
    /// Games that ended with every candidate eliminated
    pub no_candidates: usize,
    /// Mean guesses over solved games
    pub average_guesses: f64,
    pub max_guesses: usize,
    /// Solved games by number of guesses
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
}

/// Pick `count` targets spread evenly over the list
#[must_use]
pub fn sample_targets(words: &[Word], count: usize) -> Vec<Word> {
    if count == 0 || words.is_empty() {
        return Vec::new();
    }
    if count >= words.len() {
        return words.to_vec();
    }

    let step = words.len() as f64 / count as f64;
    (0..count)
        .map(|i| words[(i as f64 * step) as usize].clone())
        .collect()
}

/// Solve every target and collect statistics
pub fn run_benchmark<S: Strategy + Sync>(
    solver: &Solver<S>,
    targets: &[Word],
    show_progress: bool,
) -> BenchmarkResult {
    let start = Instant::now();

    let pb = if show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcomes: Vec<Result<(SolveOutcome, usize), SolveError>> = targets
        .par_iter()
        .map(|target| {
            let result = solver
                .solve_against(target)
                .map(|report| (report.outcome, report.attempts()));
            if let Err(e) = &result {
                warn!(word = %target, error = %e, "benchmark game failed");
            }
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut result = BenchmarkResult {
        total_words: targets.len(),
        solved: 0,
        out_of_attempts: 0,
        no_candidates: 0,
        average_guesses: 0.0,
        max_guesses: 0,
        distribution: FxHashMap::default(),
        duration: start.elapsed(),
    };

    let mut total_guesses = 0;
    for outcome in outcomes {
        match outcome {
            Ok((SolveOutcome::Solved, attempts)) => {
                result.solved += 1;
                total_guesses += attempts;
                result.max_guesses = result.max_guesses.max(attempts);
                *result.distribution.entry(attempts).or_insert(0) += 1;
            }
            Ok((SolveOutcome::OutOfAttempts, attempts)) => {
                result.out_of_attempts += 1;
                result.max_guesses = result.max_guesses.max(attempts);
            }
            Err(_) => result.no_candidates += 1,
        }
    }

    if result.solved > 0 {
        result.average_guesses = total_guesses as f64 / result.solved as f64;
    }

    info!(
        words = result.total_words,
        solved = result.solved,
        average = result.average_guesses,
        "benchmark finished"
    );
    result
}
