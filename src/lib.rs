//! Wordle Eliminator
//!
//! A Wordle and Absurdle solver that keeps a per-letter constraint model,
//! eliminates every word the feedback rules out and picks the next guess as
//! the candidate least similar to what has already been played.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_eliminator::core::Word;
//! use wordle_eliminator::solver::{SimilarityStrategy, Solver};
//! use wordle_eliminator::wordlists::{WORDS, loader::words_from_slice};
//!
//! let words = words_from_slice(WORDS);
//! let solver = Solver::new(SimilarityStrategy, &words);
//!
//! let report = solver.solve_against(&Word::new("check").unwrap()).unwrap();
//! assert_eq!(report.rounds[0].guess.text(), "salet");
//! assert!(report.attempts() <= 6);
//! ```

// Core domain types
pub mod core;

// Constraint model, elimination and guess selection
pub mod solver;

// Sources of feedback
pub mod provider;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub mod logging;
