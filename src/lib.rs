//! Wordle Puzzles
//!
//! A terminal word-guessing puzzle game: a fixed catalog of puzzles, per-letter
//! feedback with proper duplicate-letter handling, and a completion record of
//! solved puzzles.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_puzzles::core::{Feedback, Word};
//!
//! let target = Word::new("crane").unwrap();
//! let feedback = Feedback::score("adieu", &target);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Puzzle catalog
pub mod catalog;

// Puzzle session state machine
pub mod session;

// Completion record persistence
pub mod store;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
