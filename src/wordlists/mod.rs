//! Word lists
//!
//! The default list is embedded in the binary; other lists can be loaded from
//! a file with one word per line.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert!(Word::new(word).is_ok(), "Word '{word}' is not a valid guess");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_words_are_unique() {
        let unique: rustc_hash::FxHashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn contains_default_opening() {
        assert!(WORDS.contains(&crate::solver::DEFAULT_OPENING));
        assert!(WORDS.contains(&"check"));
    }
}
