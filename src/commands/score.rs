//! One-off guess scoring command
//!
//! Scores a single guess against a target word and returns the verdicts for
//! display; useful for checking how the duplicate-letter rules play out.

use crate::core::{Feedback, Word};

/// Result of scoring a guess against a target
#[derive(Debug)]
pub struct ScoreReport {
    pub guess: String,
    pub target: String,
    pub feedback: Feedback,
}

/// Score a guess against a target word
///
/// Both inputs are validated as words and must be the same length.
///
/// # Errors
///
/// Returns an error message if either word is invalid or the lengths differ.
pub fn score_guess(guess: &str, target: &str) -> Result<ScoreReport, String> {
    let target_word = Word::new(target).map_err(|e| format!("Invalid target word: {e}"))?;
    let guess_word = Word::new(guess).map_err(|e| format!("Invalid guess word: {e}"))?;

    if guess_word.len() != target_word.len() {
        return Err(format!(
            "Guess has {} letters but the target has {}",
            guess_word.len(),
            target_word.len()
        ));
    }

    let feedback = Feedback::score(guess_word.text(), &target_word);

    Ok(ScoreReport {
        guess: guess_word.text().to_string(),
        target: target_word.text().to_string(),
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict::{Absent, Correct, Present};

    #[test]
    fn score_guess_reports_verdicts() {
        let report = score_guess("adieu", "crane").unwrap();
        assert_eq!(
            report.feedback.verdicts(),
            &[Present, Absent, Absent, Present, Absent]
        );
        assert_eq!(report.guess, "adieu");
        assert_eq!(report.target, "crane");
    }

    #[test]
    fn score_guess_normalizes_case() {
        let report = score_guess("CRANE", "crane").unwrap();
        assert!(report.feedback.is_all_correct());
        assert_eq!(report.guess, "crane");
    }

    #[test]
    fn score_guess_rejects_length_mismatch() {
        let result = score_guess("cat", "crane");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("letters"));
    }

    #[test]
    fn score_guess_rejects_invalid_words() {
        assert!(score_guess("cr4ne", "crane").is_err());
        assert!(score_guess("crane", "").is_err());
    }
}
