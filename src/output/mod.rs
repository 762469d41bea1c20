//! Terminal output
//!
//! The round presenter used by the solver, plus pretty-printing for command
//! results.

pub mod display;
pub mod formatters;
mod presenter;

pub use display::{print_benchmark_result, print_solve_report};
pub use presenter::{NullPresenter, Presenter, TerminalPresenter};
