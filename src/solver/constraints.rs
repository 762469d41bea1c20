//! Per-letter constraint model
//!
//! Every hint received during a game is folded into one [`LetterConstraint`]
//! per letter. Constraints only ever tighten.

use crate::core::{Feedback, Hint, WORD_LENGTH, Word};
use rustc_hash::FxHashSet;

const ALPHABET_SIZE: usize = 26;

/// Everything learned so far about one letter of the solution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterConstraint {
    /// Positions where the letter was marked correct
    pub known_positions: FxHashSet<usize>,
    /// Positions where the letter was marked present, so it cannot sit there
    pub impossible_positions: FxHashSet<usize>,
    /// Lower bound on occurrences of the letter in the solution
    pub min_count: usize,
    /// Set once the letter came back absent: the solution holds exactly `min_count`
    pub count_exact: bool,
}

impl LetterConstraint {
    /// True if no hint has mentioned this letter yet
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.known_positions.is_empty()
            && self.impossible_positions.is_empty()
            && self.min_count == 0
            && !self.count_exact
    }
}

/// Constraint state for letters `a` through `z`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintModel {
    letters: [LetterConstraint; ALPHABET_SIZE],
}

impl Default for ConstraintModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstraintModel {
    /// Create an empty model where every word is still possible
    #[must_use]
    pub fn new() -> Self {
        Self {
            letters: std::array::from_fn(|_| LetterConstraint::default()),
        }
    }

    /// Fold one round of feedback into the model
    ///
    /// The occurrence bound is taken from a single round's correct and present
    /// marks for a letter. Marks from different rounds may refer to the same
    /// instance of the letter in the solution, so they are never summed across
    /// rounds.
    ///
    /// # Examples
    /// ```
    /// use wordle_eliminator::core::{Hint, Word};
    /// use wordle_eliminator::solver::ConstraintModel;
    ///
    /// let guess = Word::new("bbaaa").unwrap();
    /// let solution = Word::new("aabbb").unwrap();
    ///
    /// let mut model = ConstraintModel::new();
    /// model.update(&guess, &Hint::compute(&guess, &solution));
    ///
    /// assert_eq!(model.letter(b'a').min_count, 2);
    /// assert!(model.letter(b'a').count_exact);
    /// assert_eq!(model.letter(b'b').min_count, 2);
    /// assert!(!model.letter(b'b').count_exact);
    /// ```
    pub fn update(&mut self, guess: &Word, hint: &Hint) {
        let mut round_tally = [0usize; ALPHABET_SIZE];
        let mut touched = [false; ALPHABET_SIZE];

        for position in 0..WORD_LENGTH {
            let index = letter_index(guess.char_at(position));
            let constraint = &mut self.letters[index];
            touched[index] = true;

            match hint.at(position) {
                Feedback::Correct => {
                    constraint.known_positions.insert(position);
                    round_tally[index] += 1;
                }
                Feedback::Present => {
                    constraint.impossible_positions.insert(position);
                    round_tally[index] += 1;
                }
                Feedback::Absent => constraint.count_exact = true,
            }
        }

        for (index, constraint) in self.letters.iter_mut().enumerate() {
            if touched[index] {
                constraint.min_count = constraint
                    .min_count
                    .max(round_tally[index])
                    .max(constraint.known_positions.len());
            }
        }
    }

    /// Constraint for a lowercase ASCII letter
    ///
    /// # Panics
    /// Panics if `letter` is not in `a..=z`
    #[must_use]
    pub fn letter(&self, letter: u8) -> &LetterConstraint {
        &self.letters[letter_index(letter)]
    }

    /// Letters that carry at least one constraint, paired with it
    pub fn constrained(&self) -> impl Iterator<Item = (u8, &LetterConstraint)> {
        (b'a'..=b'z')
            .zip(self.letters.iter())
            .filter(|(_, constraint)| !constraint.is_unconstrained())
    }
}

#[inline]
fn letter_index(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_lowercase(), "letter must be a-z");
    usize::from(letter - b'a')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fold(model: &mut ConstraintModel, guess: &str, solution: &str) {
        let guess = Word::new(guess).unwrap();
        let hint = Hint::compute(&guess, &Word::new(solution).unwrap());
        model.update(&guess, &hint);
    }

    #[test]
    fn new_model_is_unconstrained() {
        let model = ConstraintModel::new();
        assert_eq!(model.constrained().count(), 0);
        assert!(model.letter(b'q').is_unconstrained());
    }

    #[test]
    fn correct_records_known_position() {
        let mut model = ConstraintModel::new();
        fold(&mut model, "later", "aabbb");

        let a = model.letter(b'a');
        assert!(a.known_positions.contains(&1));
        assert!(a.impossible_positions.is_empty());
        assert_eq!(a.min_count, 1);
        assert!(!a.count_exact);
    }

    #[test]
    fn absent_freezes_count() {
        let mut model = ConstraintModel::new();
        fold(&mut model, "later", "aabbb");

        for letter in [b'l', b't', b'e', b'r'] {
            let c = model.letter(letter);
            assert!(c.count_exact);
            assert_eq!(c.min_count, 0);
        }
    }

    #[test]
    fn present_records_impossible_position() {
        let mut model = ConstraintModel::new();
        fold(&mut model, "bbaaa", "aabbb");

        let b = model.letter(b'b');
        assert_eq!(b.impossible_positions.len(), 2);
        assert!(b.impossible_positions.contains(&0));
        assert!(b.impossible_positions.contains(&1));
        assert_eq!(b.min_count, 2);
    }

    #[test]
    fn known_and_impossible_stay_disjoint_for_consistent_feedback() {
        let mut model = ConstraintModel::new();
        fold(&mut model, "bbaaa", "aabbb");
        fold(&mut model, "aaabb", "aabbb");

        for (_, c) in model.constrained() {
            assert!(c.known_positions.is_disjoint(&c.impossible_positions));
        }
    }

    #[test]
    fn min_count_does_not_double_count_across_rounds() {
        // Both rounds see the single E of the solution, from different spots
        let mut model = ConstraintModel::new();
        fold(&mut model, "early", "check");
        fold(&mut model, "taken", "check");

        let e = model.letter(b'e');
        assert_eq!(e.min_count, 1);
        assert_eq!(e.impossible_positions.len(), 2);
        assert_eq!(e.known_positions.len(), 0);
    }

    #[test]
    fn min_count_never_decreases() {
        let mut model = ConstraintModel::new();
        fold(&mut model, "bbaaa", "aabbb");
        assert_eq!(model.letter(b'b').min_count, 2);

        // Only one B in this guess; the bound learned earlier is kept
        fold(&mut model, "bloom", "aabbb");
        assert_eq!(model.letter(b'b').min_count, 2);
    }
}
