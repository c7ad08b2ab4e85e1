//! Catalog loading utilities
//!
//! Loads a custom puzzle catalog from a plain text file, one word per line.

use super::Catalog;
use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load a catalog from a file
///
/// Lines that are empty or fail word validation are skipped; the remaining
/// words are assigned ids in file order.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_puzzles::catalog::loader::load_from_file;
///
/// let catalog = load_from_file("data/puzzles.txt").unwrap();
/// println!("Loaded {} puzzles", catalog.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Catalog> {
    let content = fs::read_to_string(path)?;

    let words: Vec<Word> = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                match Word::new(trimmed) {
                    Ok(word) => Some(word),
                    Err(e) => {
                        log::warn!("Skipping invalid catalog entry '{trimmed}': {e}");
                        None
                    }
                }
            }
        })
        .collect();

    Ok(Catalog::from_words(words))
}
