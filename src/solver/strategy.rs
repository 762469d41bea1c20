//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::similarity::ratio;
use crate::core::{WORD_LENGTH, Word};
use rayon::prelude::*;
use tracing::warn;

/// A strategy for picking the next guess from the surviving candidates
pub trait Strategy {
    /// Select the next guess given the words already played this game
    ///
    /// Returns `None` if there are no candidates.
    fn select_guess<'a>(&self, candidates: &'a [Word], history: &[Word]) -> Option<&'a Word>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Most-different-from-history heuristic (default)
    Similarity(SimilarityStrategy),
    /// Uniform random choice among candidates
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(&self, candidates: &'a [Word], history: &[Word]) -> Option<&'a Word> {
        match self {
            Self::Similarity(s) => s.select_guess(candidates, history),
            Self::Random(s) => s.select_guess(candidates, history),
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Similarity(SimilarityStrategy)
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "similarity", "heuristic", "random".
    /// Defaults to similarity if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "similarity" | "heuristic" => Self::Similarity(SimilarityStrategy),
            "random" => Self::Random(RandomStrategy),
            other => {
                warn!(strategy = other, "unknown strategy, using similarity");
                Self::default()
            }
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Similarity(_) => "similarity",
            Self::Random(_) => "random",
        }
    }
}

/// Similarity heuristic
///
/// Prefers the candidate least like everything guessed so far and with the
/// fewest repeated letters. Such guesses test the most new letters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimilarityStrategy;

impl SimilarityStrategy {
    /// Score a candidate; lower is better
    ///
    /// Sum of the similarity ratio against each past guess, plus one point per
    /// repeated letter.
    #[must_use]
    pub fn score(word: &Word, history: &[Word]) -> f64 {
        let similarity: f64 = history
            .iter()
            .map(|guess| ratio(word.chars(), guess.chars()))
            .sum();
        let repeats = WORD_LENGTH - word.distinct_letters();
        similarity + repeats as f64
    }
}

impl Strategy for SimilarityStrategy {
    fn select_guess<'a>(&self, candidates: &'a [Word], history: &[Word]) -> Option<&'a Word> {
        candidates
            .par_iter()
            .map(|word| (word, Self::score(word, history)))
            .min_by(|(w1, s1), (w2, s2)| s1.total_cmp(s2).then_with(|| w1.cmp(w2)))
            .map(|(word, _)| word)
    }
}

/// Random strategy
///
/// Picks any candidate. Finishes games but makes no attempt to be quick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a>(&self, candidates: &'a [Word], _history: &[Word]) -> Option<&'a Word> {
        use rand::prelude::IndexedRandom;

        candidates.choose(&mut rand::rng())
    }
}
