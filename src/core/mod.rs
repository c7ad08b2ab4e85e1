//! Core domain types for the puzzle game
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and have clear mathematical properties.

mod feedback;
mod word;

pub use feedback::{Feedback, Verdict};
pub use word::{Word, WordError};
