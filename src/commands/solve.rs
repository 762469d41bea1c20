//! Word solving command
//!
//! Plays a game against a known solution and prints every round.

use crate::core::Word;
use crate::output::TerminalPresenter;
use crate::provider::{OracleProvider, ProviderType};
use crate::solver::{SolveReport, Solver, Strategy};
use anyhow::{Context, Result, bail};

/// Solve `target` with the given solver
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters or contains non-letters)
/// - The target is not in the solver's word list
/// - The solver runs out of candidates
pub fn solve_word<S: Strategy>(target: &str, solver: &Solver<S>, verbose: bool) -> Result<SolveReport> {
    let target = Word::new(target).context("Invalid target word")?;
    if !solver.words().contains(&target) {
        bail!("'{target}' is not in the word list");
    }

    let mut provider = ProviderType::Oracle(OracleProvider::new(target));
    let mut presenter = TerminalPresenter::stdout(verbose);
    let report = solver.solve(&mut provider, &mut presenter)?;
    Ok(report)
}
