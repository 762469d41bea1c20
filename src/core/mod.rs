//! Core domain types for the puzzle
//!
//! Words and hints with no solver logic attached. Everything here is pure and
//! cheap to test in isolation.

mod hint;
mod word;

pub use hint::{Feedback, Hint, HintParseError};
pub use word::{WORD_LENGTH, Word, WordError};
