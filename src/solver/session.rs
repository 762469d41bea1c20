//! Per-game solving state
//!
//! A [`Session`] owns everything that changes during one game: the constraint
//! model, the surviving candidates and the guess history. It is created at the
//! start of a solve and dropped at the end; nothing is shared between games.

use super::constraints::ConstraintModel;
use super::eliminator::eliminate;
use crate::core::{Hint, Word};
use crate::provider::ProviderError;
use std::fmt;

/// One completed round of a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// Zero-based round index
    pub index: usize,
    pub guess: Word,
    pub hint: Hint,
    /// Candidates left once this round's hint was applied
    pub candidates_after: usize,
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    /// The last guess matched the solution
    Solved,
    /// The attempt cap was reached first
    OutOfAttempts,
}

/// Result of a solve that ran to a normal end
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub outcome: SolveOutcome,
    pub rounds: Vec<Round>,
    /// Guesses the game refused, in the order they were tried
    pub rejected: Vec<Word>,
}

impl SolveReport {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.outcome == SolveOutcome::Solved
    }

    /// Number of guesses the game accepted
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.rounds.len()
    }

    #[must_use]
    pub fn final_guess(&self) -> Option<&Word> {
        self.rounds.last().map(|round| &round.guess)
    }
}

/// Failure of a solve
#[derive(Debug)]
pub enum SolveError {
    /// Every candidate was eliminated; the feedback contradicts the word list
    NoCandidates {
        /// Round index at which the set ran dry
        round: usize,
        /// Guesses accepted before that point
        guesses: usize,
    },
    /// The hint provider failed
    Provider(ProviderError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidates { round, guesses } => write!(
                f,
                "No candidates left in round {} after {guesses} accepted guesses",
                round + 1
            ),
            Self::Provider(e) => write!(f, "Hint provider failed: {e}"),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Provider(e) => Some(e),
            Self::NoCandidates { .. } => None,
        }
    }
}

impl From<ProviderError> for SolveError {
    fn from(e: ProviderError) -> Self {
        Self::Provider(e)
    }
}

/// Mutable state of a single game
#[derive(Debug, Clone)]
pub struct Session {
    model: ConstraintModel,
    candidates: Vec<Word>,
    history: Vec<Word>,
    rounds: Vec<Round>,
    rejected: Vec<Word>,
    round_index: usize,
}

impl Session {
    /// Start a game where every word in the list is still possible
    #[must_use]
    pub fn new(words: &[Word]) -> Self {
        Self {
            model: ConstraintModel::new(),
            candidates: words.to_vec(),
            history: Vec::new(),
            rounds: Vec::new(),
            rejected: Vec::new(),
            round_index: 0,
        }
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Guesses accepted so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[Word] {
        &self.history
    }

    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    #[must_use]
    pub const fn model(&self) -> &ConstraintModel {
        &self.model
    }

    #[must_use]
    pub const fn round_index(&self) -> usize {
        self.round_index
    }

    /// Apply a hint the game gave for `guess`
    ///
    /// A solving hint only records the round. Any other hint tightens the
    /// model, replaces the candidate set with the filtered one and advances
    /// the round index.
    pub fn record(&mut self, guess: Word, hint: Hint) -> &Round {
        let index = self.round_index;

        if !hint.is_solved() {
            self.model.update(&guess, &hint);
            self.candidates = eliminate(&self.candidates, &guess, &self.model);
            self.round_index += 1;
        }

        self.history.push(guess.clone());
        self.rounds.push(Round {
            index,
            guess,
            hint,
            candidates_after: self.candidates.len(),
        });
        &self.rounds[self.rounds.len() - 1]
    }

    /// Drop a guess the game refused to accept
    ///
    /// The word is not a valid guess for this game at all, so no constraint is
    /// learned from it.
    pub fn reject(&mut self, guess: &Word) {
        self.candidates = self
            .candidates
            .iter()
            .filter(|&word| word != guess)
            .cloned()
            .collect();
        self.rejected.push(guess.clone());
    }

    /// Consume the session into a report
    #[must_use]
    pub fn into_report(self, outcome: SolveOutcome) -> SolveReport {
        SolveReport {
            outcome,
            rounds: self.rounds,
            rejected: self.rejected,
        }
    }

    pub(crate) fn no_candidates(&self) -> SolveError {
        SolveError::NoCandidates {
            round: self.round_index,
            guesses: self.rounds.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn record_filters_and_advances() {
        let mut session = Session::new(&words(&["check", "chick", "chuck", "salet"]));
        let guess = Word::new("chick").unwrap();
        let hint = Hint::compute(&guess, &Word::new("check").unwrap());

        let round = session.record(guess, hint).clone();
        assert_eq!(round.index, 0);
        assert_eq!(round.candidates_after, 2);
        assert_eq!(session.round_index(), 1);
        assert_eq!(session.candidates(), words(&["check", "chuck"]).as_slice());
        assert_eq!(session.history(), words(&["chick"]).as_slice());
    }

    #[test]
    fn record_solved_round_keeps_index() {
        let mut session = Session::new(&words(&["check", "chick"]));
        let guess = Word::new("check").unwrap();
        session.record(guess, Hint::SOLVED);

        assert_eq!(session.round_index(), 0);
        assert_eq!(session.rounds().len(), 1);
        assert_eq!(session.candidates().len(), 2);
    }

    #[test]
    fn reject_drops_word_without_learning() {
        let mut session = Session::new(&words(&["check", "chick", "chuck"]));
        session.reject(&Word::new("chick").unwrap());

        assert_eq!(session.candidates(), words(&["check", "chuck"]).as_slice());
        assert_eq!(session.round_index(), 0);
        assert!(session.history().is_empty());
        assert_eq!(session.model(), &ConstraintModel::new());

        let report = session.into_report(SolveOutcome::OutOfAttempts);
        assert_eq!(report.rejected, words(&["chick"]));
        assert_eq!(report.attempts(), 0);
    }

    #[test]
    fn candidate_set_never_regrows() {
        let pool = words(&["check", "chick", "chuck", "thick", "trick", "crane"]);
        let solution = Word::new("chuck").unwrap();
        let mut session = Session::new(&pool);
        let mut previous = session.candidates().len();

        for guess in ["crane", "thick", "chick"] {
            let guess = Word::new(guess).unwrap();
            let hint = Hint::compute(&guess, &solution);
            session.record(guess, hint);
            assert!(session.candidates().len() <= previous);
            assert!(session.candidates().contains(&solution));
            previous = session.candidates().len();
        }
    }

    #[test]
    fn no_candidates_error_reports_position() {
        let session = Session::new(&[]);
        let err = session.no_candidates();
        assert!(matches!(
            err,
            SolveError::NoCandidates {
                round: 0,
                guesses: 0
            }
        ));
        assert_eq!(
            err.to_string(),
            "No candidates left in round 1 after 0 accepted guesses"
        );
    }
}
