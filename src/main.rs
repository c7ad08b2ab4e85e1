//! Wordle Puzzles - CLI
//!
//! Terminal Wordle-style puzzle game with TUI and plain CLI modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_puzzles::{
    catalog::{Catalog, loader::load_from_file},
    commands::{index_entries, run_simple, score_guess},
    interactive::{App, run_tui},
    output::{print_index, print_score_report},
    store::JsonFileStore,
};

#[derive(Parser)]
#[command(
    name = "wordle_puzzles",
    about = "Terminal Wordle-style puzzle game with a fixed puzzle catalog",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Catalog: 'embedded' (default) or path to a word list file
    #[arg(short = 'c', long, global = true, default_value = "embedded")]
    catalog: String,

    /// Completion store file (default: platform data directory)
    #[arg(short = 's', long, global = true)]
    store: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Puzzle id to open directly; otherwise the index is shown
        id: Option<usize>,
    },

    /// Simple CLI mode (line-based, no TUI)
    Simple {
        /// Puzzle id to play
        id: usize,
    },

    /// Print the puzzle index with solved badges
    List,

    /// Score a guess against a target word
    Score {
        /// The guess to score
        guess: String,

        /// The target word
        target: String,
    },
}

/// Load the catalog based on the -c flag
fn load_catalog(catalog_mode: &str) -> Result<Catalog> {
    match catalog_mode {
        "embedded" => Ok(Catalog::embedded()),
        path => Ok(load_from_file(path)?),
    }
}

/// Open the completion store based on the -s flag
fn open_store(path: Option<PathBuf>) -> Result<JsonFileStore> {
    let store = match path {
        Some(path) => JsonFileStore::open(path)?,
        None => JsonFileStore::open_default()?,
    };
    Ok(store)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let catalog = load_catalog(&cli.catalog)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { id: None });

    match command {
        Commands::Play { id } => {
            let store = open_store(cli.store)?;
            let mut app = App::new(catalog, store);
            if let Some(id) = id {
                app.open_puzzle(id);
            }
            run_tui(app)
        }
        Commands::Simple { id } => {
            let mut store = open_store(cli.store)?;
            run_simple(&catalog, &mut store, id).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::List => {
            let store = open_store(cli.store)?;
            let entries = index_entries(&catalog, &store);
            print_index(&entries);
            Ok(())
        }
        Commands::Score { guess, target } => {
            let report = score_guess(&guess, &target).map_err(|e| anyhow::anyhow!(e))?;
            print_score_report(&report);
            Ok(())
        }
    }
}
