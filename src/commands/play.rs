//! Play command
//!
//! Suggests guesses for a game the user plays elsewhere, reading the feedback
//! from stdin.

use crate::output::TerminalPresenter;
use crate::provider::{ManualInputProvider, ProviderError, ProviderType};
use crate::solver::{SolveError, SolveReport, Solver, Strategy};
use anyhow::Result;

/// Run an interactive game on stdin/stdout
///
/// Returns `None` if the user quits before the game ends.
///
/// # Errors
///
/// Returns an error if stdin/stdout fail or the feedback eliminates every
/// candidate.
pub fn run_play<S: Strategy>(solver: &Solver<S>) -> Result<Option<SolveReport>> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordle Eliminator - Play Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Type each suggested word into the game, then enter its feedback:\n");
    println!("  - Use G/g/2/🟩 for green (correct position)");
    println!("  - Use Y/y/1/🟨 for yellow (wrong position)");
    println!("  - Use -/_/0/⬜ for gray (not in word)");
    println!("  - Type 'win' if the word was right, 'reject' if the game refused it\n");
    println!("Type 'quit' to exit.\n");

    let mut provider = ProviderType::Manual(ManualInputProvider::stdio());
    let mut presenter = TerminalPresenter::stdout(true);

    match solver.solve(&mut provider, &mut presenter) {
        Ok(report) => Ok(Some(report)),
        Err(SolveError::Provider(ProviderError::Aborted)) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
