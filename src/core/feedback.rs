//! Guess feedback scoring
//!
//! Compares a guess against the target word and classifies every guess letter
//! as correct (right position), present (in the word, wrong position), or
//! absent. Duplicate letters are handled with a consumable letter pool so a
//! guess never shows more colored tiles for a letter than the target actually
//! contains.

use super::Word;
use std::fmt;

/// Per-letter feedback classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Letter is in the correct position
    Correct,
    /// Letter is in the word but at a different position
    Present,
    /// Letter is not in the word (or all its occurrences are used up)
    Absent,
}

/// Ordered feedback for one guess
///
/// One verdict per guess letter, in guess order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    verdicts: Vec<Verdict>,
}

impl Feedback {
    /// Score `guess` against `target`
    ///
    /// Two-pass algorithm:
    /// 1. Mark exact position matches as `Correct` and consume those target
    ///    letters.
    /// 2. For every other guess letter, consume a remaining target letter of
    ///    the same kind for `Present`; otherwise the verdict is `Absent`.
    ///
    /// The result always has exactly one verdict per guess letter. Guesses
    /// shorter than the target are allowed (the session may accept an
    /// incomplete guess): uncovered target positions simply stay in the pool
    /// for pass 2.
    ///
    /// # Examples
    /// ```
    /// use wordle_puzzles::core::{Feedback, Verdict, Word};
    ///
    /// let target = Word::new("crane").unwrap();
    /// let feedback = Feedback::score("adieu", &target);
    ///
    /// // A(present) D(absent) I(absent) E(present) U(absent)
    /// assert_eq!(
    ///     feedback.verdicts(),
    ///     &[
    ///         Verdict::Present,
    ///         Verdict::Absent,
    ///         Verdict::Absent,
    ///         Verdict::Present,
    ///         Verdict::Absent,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn score(guess: &str, target: &Word) -> Self {
        let guess_bytes = guess.as_bytes();
        let target_bytes = target.bytes();
        let mut verdicts = vec![Verdict::Absent; guess_bytes.len()];
        let mut available = target.letter_counts();

        // First pass: exact position matches
        for (i, &letter) in guess_bytes.iter().enumerate() {
            if target_bytes.get(i) == Some(&letter) {
                verdicts[i] = Verdict::Correct;

                // Remove from the available pool
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but letter still in the pool
        for (i, &letter) in guess_bytes.iter().enumerate() {
            if verdicts[i] == Verdict::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&letter)
                && *count > 0
            {
                verdicts[i] = Verdict::Present;
                *count -= 1;
            }
        }

        Self { verdicts }
    }

    /// The verdicts in guess order
    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    /// Number of verdicts (equals the guess length)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    /// True for the feedback of an empty guess
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    /// Whether every verdict is `Correct`
    ///
    /// For a full-length guess this means the guess equals the target.
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        !self.verdicts.is_empty() && self.verdicts.iter().all(|v| *v == Verdict::Correct)
    }

    /// Count the number of `Correct` verdicts
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.verdicts
            .iter()
            .filter(|v| **v == Verdict::Correct)
            .count()
    }

    /// Count the number of `Present` verdicts
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.verdicts
            .iter()
            .filter(|v| **v == Verdict::Present)
            .count()
    }

    /// Convert the feedback to an emoji tile string
    ///
    /// # Examples
    /// ```
    /// use wordle_puzzles::core::{Feedback, Word};
    ///
    /// let target = Word::new("crane").unwrap();
    /// assert_eq!(Feedback::score("crane", &target).to_emoji(), "🟩🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.verdicts
            .iter()
            .map(|v| match v {
                Verdict::Correct => '🟩',
                Verdict::Present => '🟨',
                Verdict::Absent => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Verdict::{Absent, Correct, Present};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn feedback_all_absent() {
        let feedback = Feedback::score("abcde", &word("fghij"));
        assert_eq!(feedback.verdicts(), &[Absent; 5]);
        assert_eq!(feedback.count_correct(), 0);
        assert_eq!(feedback.count_present(), 0);
    }

    #[test]
    fn feedback_all_correct() {
        let feedback = Feedback::score("crane", &word("crane"));
        assert!(feedback.is_all_correct());
        assert_eq!(feedback.count_correct(), 5);
    }

    #[test]
    fn feedback_length_equals_guess_length() {
        let target = word("crane");
        for guess in ["adieu", "slate", "zzzzz"] {
            assert_eq!(Feedback::score(guess, &target).len(), guess.len());
        }
    }

    #[test]
    fn feedback_correct_count_matches_exact_positions() {
        let target = word("crane");
        for (guess, expected) in [("crate", 4), ("carne", 3), ("xxxxx", 0), ("crane", 5)] {
            let exact = guess
                .bytes()
                .zip(target.bytes().iter().copied())
                .filter(|(g, t)| g == t)
                .count();
            assert_eq!(exact, expected);
            assert_eq!(Feedback::score(guess, &target).count_correct(), expected);
        }
    }

    #[test]
    fn feedback_duplicate_letters_green_takes_priority() {
        // SHEEP vs SPEED
        // S(correct) H(absent) E(correct) E(correct) P(present)
        // The pool after pass 1 holds P and D, so the final P is present.
        let feedback = Feedback::score("sheep", &word("speed"));
        assert_eq!(
            feedback.verdicts(),
            &[Correct, Absent, Correct, Correct, Present]
        );
    }

    #[test]
    fn feedback_duplicate_letters_all_yellow() {
        // SPEED vs ERASE
        // S(present) P(absent) E(present) E(present) D(absent)
        let feedback = Feedback::score("speed", &word("erase"));
        assert_eq!(
            feedback.verdicts(),
            &[Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn feedback_duplicate_letters_pool_not_exceeded() {
        // LULLS vs ALLOT: the target has two Ls. One is consumed by the
        // exact match at position 2, so only one other guess L can be present.
        let feedback = Feedback::score("lulls", &word("allot"));
        assert_eq!(
            feedback.verdicts(),
            &[Present, Absent, Correct, Absent, Absent]
        );

        let non_correct_ls = feedback
            .verdicts()
            .iter()
            .zip("lulls".bytes())
            .filter(|(v, ch)| *ch == b'l' && **v == Present)
            .count();
        assert_eq!(non_correct_ls, 1);
    }

    #[test]
    fn feedback_duplicate_letters_complex() {
        // ROBOT vs FLOOR
        // R(present) O(present) B(absent) O(correct) T(absent)
        let feedback = Feedback::score("robot", &word("floor"));
        assert_eq!(
            feedback.verdicts(),
            &[Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn feedback_classic_opener() {
        // ADIEU vs CRANE: A and E are in the word, everything else is not.
        let feedback = Feedback::score("adieu", &word("crane"));
        assert_eq!(
            feedback.verdicts(),
            &[Present, Absent, Absent, Present, Absent]
        );
    }

    #[test]
    fn feedback_short_guess() {
        let feedback = Feedback::score("cra", &word("crane"));
        assert_eq!(feedback.verdicts(), &[Correct, Correct, Correct]);

        // Letters beyond the guess stay in the pool for pass 2
        let feedback = Feedback::score("ea", &word("crane"));
        assert_eq!(feedback.verdicts(), &[Present, Present]);
    }

    #[test]
    fn feedback_empty_guess() {
        let feedback = Feedback::score("", &word("crane"));
        assert!(feedback.is_empty());
        assert!(!feedback.is_all_correct());
    }

    #[test]
    fn feedback_symmetry() {
        // Feedback of a word against itself is always all correct
        for text in ["crane", "slate", "audio", "zzzzz", "aaaaa", "boardroom"] {
            let w = word(text);
            assert!(Feedback::score(text, &w).is_all_correct());
        }
    }

    #[test]
    fn feedback_to_emoji() {
        let feedback = Feedback::score("adieu", &word("crane"));
        assert_eq!(feedback.to_emoji(), "🟨⬜⬜🟨⬜");
        assert_eq!(format!("{feedback}"), "🟨⬜⬜🟨⬜");
    }
}
