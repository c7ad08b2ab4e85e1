//! Simple interactive CLI mode
//!
//! Line-based game loop without TUI. Each input line is routed through the
//! same session operations the TUI uses; the colored grid is reprinted after
//! every submission.

use crate::catalog::Catalog;
use crate::output::formatters::{buffer_row, colored_guess};
use crate::session::{Session, SubmitOutcome};
use crate::store::CompletionStore;
use colored::Colorize;
use std::io::{self, Write};
use std::time::Instant;

/// Run the simple CLI mode for one puzzle
///
/// # Errors
///
/// Returns an error message if the puzzle id is unknown or stdin/stdout fail.
pub fn run_simple(
    catalog: &Catalog,
    store: &mut impl CompletionStore,
    id: usize,
) -> Result<(), String> {
    let mut session = Session::load(catalog, id).map_err(|e| e.to_string())?;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordle Puzzles - Simple Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Puzzle #{} — {} letters. Type a guess and press enter.",
        session.puzzle_id(),
        session.word().len()
    );
    println!("Commands: 'quit' to exit\n");

    loop {
        print_grid(&session);

        let line = get_user_input(&format!("Guess {}", session.guesses().len() + 1))?;

        match line.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            _ => {}
        }

        let outcome = submit_line(&mut session, &line, Instant::now());

        match outcome {
            SubmitOutcome::Rejected => {
                println!("\n{}\n", "Already tried that one!".red().bold());
            }
            SubmitOutcome::Solved { tries, .. } => {
                print_grid(&session);
                print_celebration(tries);

                if let Err(e) = store.record_solve(session.puzzle_id(), tries) {
                    log::error!("Failed to record completion: {e}");
                }
                return Ok(());
            }
            SubmitOutcome::Accepted { .. } | SubmitOutcome::Ignored => {}
        }
    }
}

/// Route one input line through the session operations
///
/// The buffer is rebuilt from the line (leftover rejected input is cleared
/// with backspaces first) and then submitted.
pub(crate) fn submit_line(session: &mut Session, line: &str, now: Instant) -> SubmitOutcome {
    while !session.buffer().is_empty() {
        session.backspace();
    }
    for ch in line.chars() {
        session.add_letter(ch);
    }
    session.submit_guess(now)
}

fn print_grid(session: &Session) {
    println!();
    for (i, record) in session.guesses().iter().enumerate() {
        if let Some(feedback) = session.feedback_for(i) {
            println!("  {}", colored_guess(record.text(), &feedback));
        }
    }
    if !session.is_completed() {
        println!("  {}", buffer_row(session.buffer(), session.word().len()));
    }
    println!();
}

fn print_celebration(tries: usize) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "        🎉  P U Z Z L E   S O L V E D !  🎉        "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());

    let performance = match tries {
        1 => "🏆 Perfect! First try!",
        2 => "⭐ Excellent! Two guesses!",
        3 => "💫 Great! Three guesses!",
        4 => "✨ Good! Four guesses!",
        5 => "👍 Solved in five!",
        6 => "😅 Phew! Got it in six!",
        _ => "✓ Got there in the end!",
    };

    println!(
        "\n  {}\n  Solved in {} {}\n",
        performance.bright_yellow().bold(),
        tries.to_string().bright_cyan().bold(),
        if tries == 1 { "guess" } else { "guesses" }
    );
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
