//! Embedded puzzle list
//!
//! Puzzle words compiled into the binary at build time.

// Include the generated puzzle list from the build script
include!(concat!(env!("OUT_DIR"), "/puzzles.rs"));
