//! Completion record persistence
//!
//! A small append-only store of solved puzzles: which puzzle, how many tries.
//! The game appends one record per solve; the index page reads the store to
//! show solved badges. The trait keeps the backing swappable — a JSON file
//! in the platform data directory by default, memory for tests.

use crate::catalog::PuzzleId;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One solved puzzle: id and number of tries taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    pub id: PuzzleId,
    pub tries: usize,
}

/// Persistent record of solved puzzles
///
/// Records are ordered and may contain duplicates for a puzzle solved more
/// than once; lookups take the first match.
pub trait CompletionStore {
    /// Append a completion record
    ///
    /// # Errors
    /// Returns an I/O error if the store cannot be written.
    fn record_solve(&mut self, id: PuzzleId, tries: usize) -> io::Result<()>;

    /// Tries taken for a puzzle, if it has been solved
    fn tries_for(&self, id: PuzzleId) -> Option<usize>;

    /// All records, in append order
    fn records(&self) -> &[CompletionRecord];
}

/// JSON-file-backed completion store
///
/// A missing or malformed file loads as empty rather than failing; a corrupt
/// store only costs the badges, never the game.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    records: Vec<CompletionRecord>,
}

impl JsonFileStore {
    /// Open the store at the platform's default location
    ///
    /// # Errors
    /// Returns an error if no data directory can be resolved for this
    /// platform.
    pub fn open_default() -> io::Result<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| io::Error::other("No data directory available"))?;
        Self::open(data_dir.join("wordle_puzzles").join("completions.json"))
    }

    /// Open a store at an explicit path
    ///
    /// The file does not have to exist yet; it is created on the first
    /// recorded solve.
    ///
    /// # Errors
    /// Always succeeds today; missing or malformed files load as empty.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let records = Self::load(&path);
        Ok(Self { path, records })
    }

    fn load(path: &Path) -> Vec<CompletionRecord> {
        let Ok(contents) = fs::read_to_string(path) else {
            return Vec::new();
        };

        match serde_json::from_str(&contents) {
            Ok(records) => records,
            Err(e) => {
                log::warn!(
                    "Ignoring malformed completion store at {}: {e}",
                    path.display()
                );
                Vec::new()
            }
        }
    }

    fn save(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&self.records)?;
        fs::write(&self.path, contents)
    }
}

impl CompletionStore for JsonFileStore {
    fn record_solve(&mut self, id: PuzzleId, tries: usize) -> io::Result<()> {
        self.records.push(CompletionRecord { id, tries });
        self.save()
    }

    fn tries_for(&self, id: PuzzleId) -> Option<usize> {
        self.records.iter().find(|r| r.id == id).map(|r| r.tries)
    }

    fn records(&self) -> &[CompletionRecord] {
        &self.records
    }
}

/// In-memory completion store
///
/// Used by tests and by runs that should not touch the filesystem.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<CompletionRecord>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CompletionStore for MemoryStore {
    fn record_solve(&mut self, id: PuzzleId, tries: usize) -> io::Result<()> {
        self.records.push(CompletionRecord { id, tries });
        Ok(())
    }

    fn tries_for(&self, id: PuzzleId) -> Option<usize> {
        self.records.iter().find(|r| r.id == id).map(|r| r.tries)
    }

    fn records(&self) -> &[CompletionRecord] {
        &self.records
    }
}
