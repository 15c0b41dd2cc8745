//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_review_report, print_simulation_statistics, print_solve_result, print_suggestions,
};
