//! Formatting utilities for terminal output

use crate::core::{Feedback, Verdict};
use colored::{ColoredString, Colorize};

/// Render one guess letter as a colored tile
#[must_use]
pub fn letter_tile(letter: char, verdict: Verdict) -> ColoredString {
    let letter = letter.to_ascii_uppercase().to_string();
    match verdict {
        Verdict::Correct => letter.black().on_bright_green(),
        Verdict::Present => letter.black().on_bright_yellow(),
        Verdict::Absent => letter.white().on_bright_black(),
    }
}

/// Render a whole guess as colored tiles
///
/// Letters beyond the feedback length (never produced by the scoring engine,
/// but cheap to tolerate) render unstyled.
#[must_use]
pub fn colored_guess(guess: &str, feedback: &Feedback) -> String {
    guess
        .chars()
        .enumerate()
        .map(|(i, ch)| match feedback.verdicts().get(i) {
            Some(&verdict) => format!(" {} ", letter_tile(ch, verdict)),
            None => format!(" {} ", ch.to_ascii_uppercase()),
        })
        .collect()
}

/// Render the in-progress buffer padded to the target length
///
/// Typed letters are shown uppercase; remaining positions as underscores.
#[must_use]
pub fn buffer_row(buffer: &str, target_len: usize) -> String {
    let mut row = String::new();
    for ch in buffer.chars() {
        row.push_str(&format!(" {} ", ch.to_ascii_uppercase()));
    }
    for _ in buffer.len()..target_len {
        row.push_str(" _ ");
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn colored_guess_covers_every_letter() {
        let target = Word::new("crane").unwrap();
        let feedback = Feedback::score("adieu", &target);
        let rendered = colored_guess("adieu", &feedback);

        for ch in ["A", "D", "I", "E", "U"] {
            assert!(rendered.contains(ch), "Missing letter {ch} in {rendered}");
        }
    }

    #[test]
    fn buffer_row_pads_to_target_length() {
        let row = buffer_row("cr", 5);
        assert!(row.contains('C'));
        assert!(row.contains('R'));
        assert_eq!(row.matches('_').count(), 3);
    }

    #[test]
    fn buffer_row_full_has_no_padding() {
        let row = buffer_row("crane", 5);
        assert_eq!(row.matches('_').count(), 0);
    }
}
