//! Candidate elimination
//!
//! Keeps the words that agree with every constraint in the model. Filtering
//! always builds a new collection; the input slice is never touched.

use super::constraints::{ConstraintModel, LetterConstraint};
use crate::core::Word;

/// Filter candidates against the model, dropping the guess that produced it
///
/// # Examples
/// ```
/// use wordle_eliminator::core::{Hint, Word};
/// use wordle_eliminator::solver::{ConstraintModel, eliminate};
///
/// let words: Vec<Word> = ["aabbb", "later", "abbey", "baker"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let guess = Word::new("later").unwrap();
/// let hint = Hint::compute(&guess, &words[0]);
///
/// let mut model = ConstraintModel::new();
/// model.update(&guess, &hint);
///
/// let remaining = eliminate(&words, &guess, &model);
/// assert_eq!(remaining, vec![words[0].clone()]);
/// ```
#[must_use]
pub fn eliminate(candidates: &[Word], guess: &Word, model: &ConstraintModel) -> Vec<Word> {
    candidates
        .iter()
        .filter(|&word| word != guess && is_consistent(word, model))
        .cloned()
        .collect()
}

/// Check a single word against every constrained letter of the model
#[must_use]
pub fn is_consistent(word: &Word, model: &ConstraintModel) -> bool {
    model
        .constrained()
        .all(|(letter, constraint)| satisfies(word, letter, constraint))
}

fn satisfies(word: &Word, letter: u8, constraint: &LetterConstraint) -> bool {
    if constraint
        .known_positions
        .iter()
        .any(|&p| word.char_at(p) != letter)
    {
        return false;
    }

    if constraint
        .impossible_positions
        .iter()
        .any(|&p| word.char_at(p) == letter)
    {
        return false;
    }

    let count = word.count_of(letter);
    if constraint.count_exact {
        count == constraint.min_count
    } else {
        count >= constraint.min_count
    }
}
