//! Hint providers
//!
//! A provider answers "what did the game say about this guess?". The solver
//! never knows where hints come from; it only sees [`HintProvider`].

mod manual;
mod oracle;
mod surface;

pub use manual::ManualInputProvider;
pub use oracle::OracleProvider;
pub use surface::{GameSurface, SurfaceAdapterProvider, SurfaceVocabulary};

use crate::core::{Hint, Word};
use std::fmt;
use std::io;

/// What the game made of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintResult {
    /// The guess was accepted and evaluated
    Hint(Hint),
    /// The game does not accept this word as a guess
    Rejected,
}

/// Failure to obtain a hint at all
#[derive(Debug)]
pub enum ProviderError {
    /// Reading or writing the underlying channel failed
    Io(io::Error),
    /// The user or surface ended the game early
    Aborted,
    /// The surface reported something that is not a hint
    Malformed(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Aborted => write!(f, "Game aborted"),
            Self::Malformed(detail) => write!(f, "Malformed feedback: {detail}"),
        }
    }
}

impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Aborted | Self::Malformed(_) => None,
        }
    }
}

impl From<io::Error> for ProviderError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Source of hints for the solving loop
///
/// Calls may block for as long as the source needs; retries and timeouts are
/// the provider's business.
pub trait HintProvider {
    /// Evaluate `guess`, played as zero-based attempt `attempt`
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] if no answer could be obtained.
    fn provide(&mut self, guess: &Word, attempt: usize) -> Result<HintResult, ProviderError>;
}

/// Enum wrapper for all provider types
///
/// Lets the caller pick a provider from configuration while the solver sees a
/// single concrete type.
pub enum ProviderType {
    /// Known solution, for self-tests and "guess my word" games
    Oracle(OracleProvider),
    /// Live game surface
    Surface(SurfaceAdapterProvider<Box<dyn GameSurface>>),
    /// A person reading the game and typing the feedback
    Manual(ManualInputProvider),
}

impl HintProvider for ProviderType {
    fn provide(&mut self, guess: &Word, attempt: usize) -> Result<HintResult, ProviderError> {
        match self {
            Self::Oracle(p) => p.provide(guess, attempt),
            Self::Surface(p) => p.provide(guess, attempt),
            Self::Manual(p) => p.provide(guess, attempt),
        }
    }
}

impl ProviderType {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Oracle(_) => "oracle",
            Self::Surface(_) => "surface",
            Self::Manual(_) => "manual",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_type_dispatches_to_oracle() {
        let solution = Word::new("check").unwrap();
        let mut provider = ProviderType::Oracle(OracleProvider::new(solution.clone()));
        assert_eq!(provider.name(), "oracle");
        assert_eq!(
            provider.provide(&solution, 0).unwrap(),
            HintResult::Hint(Hint::SOLVED)
        );
    }

    #[test]
    fn provider_error_display() {
        assert_eq!(ProviderError::Aborted.to_string(), "Game aborted");
        assert_eq!(
            ProviderError::Malformed("no tiles".into()).to_string(),
            "Malformed feedback: no tiles"
        );
    }
}
