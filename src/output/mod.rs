//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_index, print_score_report};
pub use formatters::colored_guess;
