//! Constraint-elimination solving
//!
//! The solving loop and the pieces it is built from: per-letter constraints,
//! candidate elimination and guess selection.

pub mod constraints;
pub mod eliminator;
mod engine;
pub mod session;
pub mod similarity;
pub mod strategy;

pub use constraints::{ConstraintModel, LetterConstraint};
pub use eliminator::{eliminate, is_consistent};
pub use engine::{DEFAULT_OPENING, GameVariant, Solver, SolverConfig, TIMED_ATTEMPTS};
pub use session::{Round, Session, SolveError, SolveOutcome, SolveReport};
pub use strategy::{RandomStrategy, SimilarityStrategy, Strategy, StrategyType};
