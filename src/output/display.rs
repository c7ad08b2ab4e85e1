//! Display functions for command results

use super::formatters::colored_guess;
use crate::commands::{IndexEntry, ScoreReport};
use colored::Colorize;

/// Print the puzzle index with solved badges
pub fn print_index(entries: &[IndexEntry]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PUZZLES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    for entry in entries {
        let title = format!("Puzzle #{}", entry.id);
        let length = format!("{} letters", entry.length);

        match entry.tries {
            Some(tries) => {
                let badge = if tries == 1 {
                    "Solved in 1 try".to_string()
                } else {
                    format!("Solved in {tries} tries")
                };
                println!(
                    "  {}  {}  {}",
                    title.bright_white().bold(),
                    length.bright_black(),
                    badge.green()
                );
            }
            None => {
                println!(
                    "  {}  {}  {}",
                    title.bright_white().bold(),
                    length.bright_black(),
                    "Unsolved".bright_black()
                );
            }
        }
    }
    println!();
}

/// Print the verdicts for a one-off guess scoring
pub fn print_score_report(report: &ScoreReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Guess {} against {}",
        report.guess.to_uppercase().bright_yellow().bold(),
        report.target.to_uppercase().bright_white().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n{}", colored_guess(&report.guess, &report.feedback));
    println!("{}\n", report.feedback.to_emoji());

    if report.feedback.is_all_correct() {
        println!("{}\n", "Exact match!".green().bold());
    } else {
        println!(
            "{} correct, {} present\n",
            report.feedback.count_correct(),
            report.feedback.count_present()
        );
    }
}
