//! Hints computed against a known solution

use super::{HintProvider, HintResult, ProviderError};
use crate::core::{Hint, Word};

/// Provider that knows the answer
///
/// Never rejects a guess: every well-formed word is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleProvider {
    solution: Word,
}

impl OracleProvider {
    #[must_use]
    pub const fn new(solution: Word) -> Self {
        Self { solution }
    }

    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }
}

impl HintProvider for OracleProvider {
    fn provide(&mut self, guess: &Word, _attempt: usize) -> Result<HintResult, ProviderError> {
        Ok(HintResult::Hint(Hint::compute(guess, &self.solution)))
    }
}
