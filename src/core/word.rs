//! Puzzle word representation
//!
//! A Word stores a 5-letter word along with letter position indices used by the
//! constraint checks.

use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Number of letters in every puzzle word
pub const WORD_LENGTH: usize = 5;

/// A 5-letter puzzle word with letter position tracking
///
/// Equality, hashing and ordering only look at the text, so words sort
/// lexicographically.
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
    char_positions: FxHashMap<u8, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is trimmed and lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_eliminator::core::Word;
    ///
    /// let word = Word::new("Check").unwrap();
    /// assert_eq!(word.text(), "check");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        let mut char_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in chars.iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            chars,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.char_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: u8) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Number of times a letter occurs in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.positions_of(letter).len()
    }

    /// Number of distinct letters in the word
    #[inline]
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.char_positions.len()
    }

    /// Letter counts, used by hint computation to track unmatched letters
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("check").unwrap();
        assert_eq!(word.text(), "check");
        assert_eq!(word.chars(), b"check");
    }

    #[test]
    fn word_creation_normalizes_case_and_whitespace() {
        assert_eq!(Word::new("SALET").unwrap().text(), "salet");
        assert_eq!(Word::new("  Later\n").unwrap().text(), "later");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("toolong"),
            Err(WordError::InvalidLength(7))
        ));
        assert!(matches!(Word::new("shrt"), Err(WordError::InvalidLength(4))));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(Word::new("cran3"), Err(WordError::InvalidCharacters)));
        assert!(matches!(Word::new("cr ne"), Err(WordError::InvalidCharacters)));
        assert!(matches!(Word::new("crañe"), Err(WordError::NonAscii)));
    }

    #[test]
    fn word_letter_queries() {
        let word = Word::new("speed").unwrap();
        assert!(word.has_letter(b's'));
        assert!(!word.has_letter(b'z'));
        assert_eq!(word.positions_of(b'e'), &[2, 3]);
        assert_eq!(word.positions_of(b'z'), &[]);
        assert_eq!(word.count_of(b'e'), 2);
        assert_eq!(word.count_of(b'q'), 0);
        assert_eq!(word.char_at(4), b'd');
    }

    #[test]
    fn word_distinct_letters() {
        assert_eq!(Word::new("salet").unwrap().distinct_letters(), 5);
        assert_eq!(Word::new("speed").unwrap().distinct_letters(), 4);
        assert_eq!(Word::new("aabbb").unwrap().distinct_letters(), 2);
    }

    #[test]
    fn word_char_counts() {
        let counts = Word::new("aabbb").unwrap().char_counts();
        assert_eq!(counts.get(&b'a'), Some(&2));
        assert_eq!(counts.get(&b'b'), Some(&3));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn word_ordering_is_lexicographic() {
        let mut words: Vec<Word> = ["later", "check", "salet"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["check", "later", "salet"]);
    }

    #[test]
    fn word_equality_ignores_input_case() {
        assert_eq!(Word::new("check").unwrap(), Word::new("CHECK").unwrap());
        assert_ne!(Word::new("check").unwrap(), Word::new("chick").unwrap());
    }
}
