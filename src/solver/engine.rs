//! Main solver interface

use super::session::{Session, SolveError, SolveOutcome, SolveReport};
use super::strategy::Strategy;
use crate::core::Word;
use crate::output::Presenter;
use crate::provider::{HintProvider, HintResult, OracleProvider};
use tracing::{debug, info, warn};

/// Opening word used when none is configured
pub const DEFAULT_OPENING: &str = "salet";

/// Attempt cap of the timed game
pub const TIMED_ATTEMPTS: usize = 6;

/// Which flavour of game is being played
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GameVariant {
    /// Daily-puzzle rules: six attempts
    #[default]
    Timed,
    /// Keep guessing until solved (e.g. Absurdle)
    FreeForm,
}

impl GameVariant {
    /// Maximum number of accepted guesses, or `None` for no limit
    #[must_use]
    pub const fn attempt_cap(self) -> Option<usize> {
        match self {
            Self::Timed => Some(TIMED_ATTEMPTS),
            Self::FreeForm => None,
        }
    }

    /// Parse a variant name: "timed" or "free-form"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "timed" | "wordle" => Some(Self::Timed),
            "free-form" | "freeform" | "absurdle" => Some(Self::FreeForm),
            _ => None,
        }
    }
}

/// Settings fixed for the lifetime of a solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// First word to play, if it is in the word list
    pub opening: String,
    pub variant: GameVariant,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            opening: DEFAULT_OPENING.to_string(),
            variant: GameVariant::Timed,
        }
    }
}

impl SolverConfig {
    #[must_use]
    pub fn with_opening(mut self, opening: impl Into<String>) -> Self {
        self.opening = opening.into().to_lowercase();
        self
    }

    #[must_use]
    pub const fn with_variant(mut self, variant: GameVariant) -> Self {
        self.variant = variant;
        self
    }
}

/// Main puzzle solver
///
/// Coordinates the solving loop using a given strategy. The solver itself is
/// immutable; each call to [`Solver::solve`] builds its own [`Session`], so one
/// solver can run many games, concurrently if needed.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    words: &'a [Word],
    config: SolverConfig,
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver with the given strategy and word list
    ///
    /// # Parameters
    /// - `strategy`: The guess selection strategy to use
    /// - `words`: Every word the solution may be
    #[must_use]
    pub fn new(strategy: S, words: &'a [Word]) -> Self {
        Self {
            strategy,
            words,
            config: SolverConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    #[must_use]
    pub const fn words(&self) -> &'a [Word] {
        self.words
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// First guess of a new game
    ///
    /// The configured opening word if the list contains it, otherwise the
    /// strategy's pick from the whole list.
    pub fn first_guess(&self) -> Option<&'a Word> {
        self.words
            .iter()
            .find(|w| w.text() == self.config.opening)
            .or_else(|| self.strategy.select_guess(self.words, &[]))
    }

    /// Play one game against `provider`, reporting each round to `presenter`
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::NoCandidates`] if every candidate gets eliminated,
    /// and [`SolveError::Provider`] if the provider fails.
    pub fn solve<P, R>(&self, provider: &mut P, presenter: &mut R) -> Result<SolveReport, SolveError>
    where
        P: HintProvider + ?Sized,
        R: Presenter + ?Sized,
    {
        let mut session = Session::new(self.words);
        let mut guess = self
            .first_guess()
            .cloned()
            .ok_or_else(|| session.no_candidates())?;

        loop {
            let attempt = session.round_index();
            let hint = match provider.provide(&guess, attempt)? {
                HintResult::Hint(hint) => hint,
                HintResult::Rejected => {
                    warn!(guess = %guess, attempt, "guess rejected by the game");
                    session.reject(&guess);
                    guess = self.next_guess(&session)?;
                    continue;
                }
            };

            let round = session.record(guess, hint);
            debug!(
                round = round.index + 1,
                guess = %round.guess,
                hint = %round.hint,
                remaining = round.candidates_after,
                "round complete"
            );
            presenter.present(round);

            if hint.is_solved() {
                info!(attempts = session.rounds().len(), "solved");
                return Ok(session.into_report(SolveOutcome::Solved));
            }

            if session.candidates().is_empty() {
                warn!(round = attempt + 1, "no candidates left");
                return Err(session.no_candidates());
            }

            if self
                .config
                .variant
                .attempt_cap()
                .is_some_and(|cap| session.round_index() >= cap)
            {
                info!(
                    attempts = session.rounds().len(),
                    remaining = session.candidates().len(),
                    "out of attempts"
                );
                return Ok(session.into_report(SolveOutcome::OutOfAttempts));
            }

            guess = self.next_guess(&session)?;
        }
    }

    /// Play one game against a known solution without presenting rounds
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::NoCandidates`] if the solution is not in the word
    /// list or gets eliminated.
    pub fn solve_against(&self, solution: &Word) -> Result<SolveReport, SolveError> {
        let mut oracle = OracleProvider::new(solution.clone());
        self.solve(&mut oracle, &mut crate::output::NullPresenter)
    }

    fn next_guess(&self, session: &Session) -> Result<Word, SolveError> {
        self.strategy
            .select_guess(session.candidates(), session.history())
            .cloned()
            .ok_or_else(|| session.no_candidates())
    }
}
