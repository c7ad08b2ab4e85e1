//! Command implementations

pub mod list;
pub mod score;
pub mod simple;

pub use list::{IndexEntry, index_entries};
pub use score::{ScoreReport, score_guess};
pub use simple::run_simple;
