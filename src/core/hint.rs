//! Per-position feedback for a guess
//!
//! A hint holds one [`Feedback`] value per letter of the guess:
//! - Correct: right letter, right position
//! - Present: letter occurs elsewhere and is not yet accounted for
//! - Absent: no further instances of the letter in the solution

use super::Word;
use super::word::WORD_LENGTH;
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Correct,
    Present,
    Absent,
}

impl Feedback {
    /// Parse one feedback character
    ///
    /// Accepts `g`/`2`/🟩 for correct, `y`/`1`/🟨 for present and
    /// `-`/`_`/`b`/`x`/`0`/⬜/⬛ for absent.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'g' | '2' | '🟩' => Some(Self::Correct),
            'y' | '1' | '🟨' => Some(Self::Present),
            '-' | '_' | 'b' | 'x' | '0' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Emoji square for display
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Error returned when a hint string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintParseError {
    InvalidLength(usize),
    InvalidCharacter(char),
}

impl fmt::Display for HintParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Hint must have exactly {WORD_LENGTH} symbols, got {len}")
            }
            Self::InvalidCharacter(ch) => write!(f, "Invalid hint symbol '{ch}'"),
        }
    }
}

impl std::error::Error for HintParseError {}

/// Feedback for a whole guess, aligned positionally with it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hint([Feedback; WORD_LENGTH]);

impl Hint {
    /// All positions correct
    pub const SOLVED: Self = Self([Feedback::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(feedback: [Feedback; WORD_LENGTH]) -> Self {
        Self(feedback)
    }

    /// Compute the hint the game would show when `guess` is played against `solution`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove those letters from the pool
    /// 2. Second pass: mark a letter present if an unmatched instance remains in
    ///    the pool, consuming it; otherwise absent
    ///
    /// The two passes keep repeated letters honest: a letter is never reported
    /// more often than it occurs in both words.
    ///
    /// # Examples
    /// ```
    /// use wordle_eliminator::core::{Hint, Word};
    ///
    /// let solution = Word::new("aabbb").unwrap();
    /// let guess = Word::new("aaabb").unwrap();
    /// assert_eq!(Hint::compute(&guess, &solution).to_string(), "GG-GG");
    ///
    /// let guess = Word::new("bbaaa").unwrap();
    /// assert_eq!(Hint::compute(&guess, &solution).to_string(), "YYYY-");
    /// ```
    #[must_use]
    pub fn compute(guess: &Word, solution: &Word) -> Self {
        let mut result = [Feedback::Absent; WORD_LENGTH];
        let mut unmatched = solution.char_counts();

        for (i, slot) in result.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            if letter == solution.char_at(i) {
                *slot = Feedback::Correct;
                if let Some(count) = unmatched.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, slot) in result.iter_mut().enumerate() {
            if *slot == Feedback::Correct {
                continue;
            }
            if let Some(count) = unmatched.get_mut(&guess.char_at(i))
                && *count > 0
            {
                *slot = Feedback::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Feedback values in position order
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &[Feedback; WORD_LENGTH] {
        &self.0
    }

    /// Feedback at a single position
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> Feedback {
        self.0[position]
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&f| f == Feedback::Correct)
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&f| f == Feedback::Correct).count()
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&f| f == Feedback::Present).count()
    }

    /// Render as emoji squares, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.to_emoji()).collect()
    }
}

impl std::str::FromStr for Hint {
    type Err = HintParseError;

    /// Parse a hint from a string like "GY-GY", "21021" or "🟩🟨⬜🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(HintParseError::InvalidLength(chars.len()));
        }

        let mut result = [Feedback::Absent; WORD_LENGTH];
        for (slot, ch) in result.iter_mut().zip(chars) {
            *slot = Feedback::from_char(ch).ok_or(HintParseError::InvalidCharacter(ch))?;
        }
        Ok(Self(result))
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for feedback in &self.0 {
            let symbol = match feedback {
                Feedback::Correct => 'G',
                Feedback::Present => 'Y',
                Feedback::Absent => '-',
            };
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
