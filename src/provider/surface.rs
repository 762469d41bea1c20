//! Adapter for live game surfaces
//!
//! A surface is whatever renders the game (a browser page, an emulator, a test
//! double). It only has to type a guess into a row and report the label shown
//! on each tile. This module turns those labels into hints.

use super::{HintProvider, HintResult, ProviderError};
use crate::core::{Feedback, Hint, WORD_LENGTH, Word};
use crate::solver::GameVariant;
use tracing::debug;

/// A game board that can be typed into and read back
pub trait GameSurface {
    /// Enter `guess` on row `row` and read the tile labels
    ///
    /// Returns `None` if the game did not evaluate the guess, which is how
    /// surfaces signal an unknown word.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] if the surface cannot be driven.
    fn submit(&mut self, guess: &str, row: usize) -> Result<Option<Vec<String>>, ProviderError>;

    /// Erase a guess the game refused so the row can be reused
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] if the surface cannot be driven.
    fn clear_entry(&mut self) -> Result<(), ProviderError>;
}

impl<S: GameSurface + ?Sized> GameSurface for Box<S> {
    fn submit(&mut self, guess: &str, row: usize) -> Result<Option<Vec<String>>, ProviderError> {
        (**self).submit(guess, row)
    }

    fn clear_entry(&mut self) -> Result<(), ProviderError> {
        (**self).clear_entry()
    }
}

/// Tile labels used by a particular game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceVocabulary {
    /// `correct` / `present` / `absent`
    Wordle,
    /// `exact` / `inexact` / `wrong`
    Absurdle,
}

impl SurfaceVocabulary {
    /// Translate one tile label
    #[must_use]
    pub fn translate(self, label: &str) -> Option<Feedback> {
        let label = label.trim().to_ascii_lowercase();
        match (self, label.as_str()) {
            (Self::Wordle, "correct") | (Self::Absurdle, "exact") => Some(Feedback::Correct),
            (Self::Wordle, "present") | (Self::Absurdle, "inexact") => Some(Feedback::Present),
            (Self::Wordle, "absent") | (Self::Absurdle, "wrong") => Some(Feedback::Absent),
            _ => None,
        }
    }

    /// Game variant played on this kind of surface
    #[must_use]
    pub const fn variant(self) -> GameVariant {
        match self {
            Self::Wordle => GameVariant::Timed,
            Self::Absurdle => GameVariant::FreeForm,
        }
    }
}

/// Provider that reads hints off a [`GameSurface`]
pub struct SurfaceAdapterProvider<S: GameSurface> {
    surface: S,
    vocabulary: SurfaceVocabulary,
}

impl<S: GameSurface> SurfaceAdapterProvider<S> {
    pub const fn new(surface: S, vocabulary: SurfaceVocabulary) -> Self {
        Self {
            surface,
            vocabulary,
        }
    }

    #[must_use]
    pub const fn vocabulary(&self) -> SurfaceVocabulary {
        self.vocabulary
    }

    pub fn into_inner(self) -> S {
        self.surface
    }

    fn translate_row(&self, labels: &[String]) -> Result<Hint, ProviderError> {
        if labels.len() != WORD_LENGTH {
            return Err(ProviderError::Malformed(format!(
                "expected {WORD_LENGTH} tiles, got {}",
                labels.len()
            )));
        }

        let mut feedback = [Feedback::Absent; WORD_LENGTH];
        for (slot, label) in feedback.iter_mut().zip(labels) {
            *slot = self
                .vocabulary
                .translate(label)
                .ok_or_else(|| ProviderError::Malformed(format!("unknown tile label '{label}'")))?;
        }
        Ok(Hint::new(feedback))
    }
}

impl<S: GameSurface> HintProvider for SurfaceAdapterProvider<S> {
    fn provide(&mut self, guess: &Word, attempt: usize) -> Result<HintResult, ProviderError> {
        let Some(labels) = self.surface.submit(guess.text(), attempt)? else {
            debug!(guess = %guess, row = attempt, "surface did not evaluate guess");
            self.surface.clear_entry()?;
            return Ok(HintResult::Rejected);
        };

        self.translate_row(&labels).map(HintResult::Hint)
    }
}
