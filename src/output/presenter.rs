//! Round presenters
//!
//! A presenter receives every completed round for display. It is a pure sink
//! and has no way to influence the solve.

use super::formatters::colorize_guess;
use crate::solver::Round;
use std::io::{self, Write};
use tracing::warn;

/// Receiver of completed rounds
pub trait Presenter {
    fn present(&mut self, round: &Round);
}

/// Presenter that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn present(&mut self, _round: &Round) {}
}

/// Collects rounds, mostly useful in tests
impl Presenter for Vec<Round> {
    fn present(&mut self, round: &Round) {
        self.push(round.clone());
    }
}

/// Prints each round as a numbered, coloured guess
pub struct TerminalPresenter<W: Write> {
    out: W,
    verbose: bool,
}

impl TerminalPresenter<io::Stdout> {
    #[must_use]
    pub fn stdout(verbose: bool) -> Self {
        Self::new(io::stdout(), verbose)
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub const fn new(out: W, verbose: bool) -> Self {
        Self { out, verbose }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_round(&mut self, round: &Round) -> io::Result<()> {
        write!(
            self.out,
            "{}. {} {}",
            round.index + 1,
            colorize_guess(&round.guess, &round.hint),
            round.hint.to_emoji()
        )?;
        if self.verbose {
            write!(self.out, "  ({} candidates left)", round.candidates_after)?;
        }
        writeln!(self.out)
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn present(&mut self, round: &Round) {
        if let Err(e) = self.write_round(round) {
            warn!("Failed to print round {}: {e}", round.index + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Hint, Word};

    fn round() -> Round {
        let guess = Word::new("later").unwrap();
        let hint = Hint::compute(&guess, &Word::new("aabbb").unwrap());
        Round {
            index: 0,
            guess,
            hint,
            candidates_after: 3,
        }
    }

    #[test]
    fn terminal_presenter_numbers_rounds() {
        colored::control::set_override(false);
        let mut presenter = TerminalPresenter::new(Vec::new(), true);
        presenter.present(&round());

        let text = String::from_utf8(presenter.into_inner()).unwrap();
        assert_eq!(text, "1. LATER ⬜🟩⬜⬜⬜  (3 candidates left)\n");
    }

    #[test]
    fn vec_presenter_records() {
        let mut seen: Vec<Round> = Vec::new();
        seen.present(&round());
        assert_eq!(seen, vec![round()]);
    }
}
