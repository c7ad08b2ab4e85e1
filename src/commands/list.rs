//! Puzzle index command
//!
//! Joins the catalog with the completion store to produce one row per puzzle:
//! id, word length, and tries taken if solved.

use crate::catalog::{Catalog, PuzzleId};
use crate::store::CompletionStore;

/// One row of the puzzle index
pub struct IndexEntry {
    pub id: PuzzleId,
    pub length: usize,
    pub tries: Option<usize>,
}

/// Build the index rows for every puzzle in the catalog
#[must_use]
pub fn index_entries(catalog: &Catalog, store: &impl CompletionStore) -> Vec<IndexEntry> {
    catalog
        .iter()
        .map(|puzzle| IndexEntry {
            id: puzzle.id(),
            length: puzzle.word().len(),
            tries: store.tries_for(puzzle.id()),
        })
        .collect()
}
