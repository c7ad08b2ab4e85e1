//! Puzzle session state machine
//!
//! A `Session` owns the mutable state of one puzzle attempt: the in-progress
//! guess buffer, the append-only guess history, the completion flag, and the
//! transient presentation flags (shake, reveal). Player actions mutate the
//! session; the presentation layer only reads it.
//!
//! Transient flags are cleared by deferred actions. These are plain data
//! owned by the session and applied by [`Session::tick`], so loading a new
//! puzzle (which replaces the session wholesale) cancels anything pending —
//! a stale timer can never touch the next puzzle's state.

use crate::catalog::{Catalog, PuzzleId};
use crate::core::{Feedback, Verdict, Word};
use std::fmt;
use std::mem;
use std::time::{Duration, Instant};

/// How long the shake flag stays set after a rejected submission
pub const SHAKE_CLEAR_DELAY: Duration = Duration::from_millis(500);

/// How long a new guess keeps its reveal flag
pub const REVEAL_CLEAR_DELAY: Duration = Duration::from_millis(1500);

/// One submitted guess
///
/// `just_added` drives a one-shot reveal cue in the presentation layer and is
/// cleared by a deferred action; nothing else ever changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    text: String,
    just_added: bool,
}

impl GuessRecord {
    /// The submitted guess text
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the reveal cue is still active
    #[inline]
    #[must_use]
    pub const fn just_added(&self) -> bool {
        self.just_added
    }
}

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting player actions
    Active,
    /// A guess matched the target; no further guesses are accepted
    Completed,
}

/// Error type for session loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The requested id is outside the catalog range
    PuzzleNotFound(PuzzleId),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PuzzleNotFound(id) => write!(f, "No puzzle with id {id}"),
        }
    }
}

impl std::error::Error for SessionError {}

/// What a call to [`Session::submit_guess`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The session is not active; nothing happened
    Ignored,
    /// Incomplete buffer matching an earlier guess; shake triggered
    Rejected,
    /// Guess appended at `index`
    Accepted { index: usize },
    /// Guess appended at `index` and it matched the target
    ///
    /// `tries` is the history length after the append; the caller should
    /// record it in the completion store.
    Solved { index: usize, tries: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeferredAction {
    ClearShake,
    ClearReveal(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Deferred {
    due: Instant,
    action: DeferredAction,
}

/// State of one puzzle attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    puzzle_id: PuzzleId,
    word: Word,
    guesses: Vec<GuessRecord>,
    buffer: String,
    phase: Phase,
    shake: bool,
    pending: Vec<Deferred>,
}

impl Session {
    /// Start a fresh session for the puzzle with the given id
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::PuzzleNotFound`] for ids outside
    /// `1..=catalog.len()`. A failed load constructs nothing, so an existing
    /// session held by the caller is untouched.
    pub fn load(catalog: &Catalog, id: PuzzleId) -> Result<Self, SessionError> {
        let puzzle = catalog.get(id).ok_or(SessionError::PuzzleNotFound(id))?;

        log::debug!("Loaded puzzle #{id} ({} letters)", puzzle.word().len());

        Ok(Self {
            puzzle_id: puzzle.id(),
            word: puzzle.word().clone(),
            guesses: Vec::new(),
            buffer: String::new(),
            phase: Phase::Active,
            shake: false,
            pending: Vec::new(),
        })
    }

    /// Append a letter to the in-progress guess
    ///
    /// Ignored unless the session is active, the buffer has room, and `ch`
    /// is alphabetic. Letters are normalized to ASCII lowercase.
    pub fn add_letter(&mut self, ch: char) {
        if self.phase != Phase::Active {
            return;
        }
        if self.buffer.len() >= self.word.len() {
            return;
        }
        if !ch.is_ascii_alphabetic() {
            return;
        }
        self.buffer.push(ch.to_ascii_lowercase());
    }

    /// Remove the last letter of the in-progress guess
    ///
    /// No-op on an empty buffer; ignored unless the session is active.
    pub fn backspace(&mut self) {
        if self.phase != Phase::Active {
            return;
        }
        self.buffer.pop();
    }

    /// Submit the in-progress guess
    ///
    /// An incomplete buffer that repeats an earlier guess is rejected: the
    /// shake flag is set (and scheduled to clear after
    /// [`SHAKE_CLEAR_DELAY`]) and the buffer is left unchanged. Any other
    /// buffer — including an incomplete one — is appended to the history
    /// with its reveal flag set (scheduled to clear after
    /// [`REVEAL_CLEAR_DELAY`]). A guess equal to the target completes the
    /// session.
    ///
    /// `now` anchors the deferred flag clears; pass `Instant::now()` outside
    /// of tests.
    pub fn submit_guess(&mut self, now: Instant) -> SubmitOutcome {
        if self.phase != Phase::Active {
            return SubmitOutcome::Ignored;
        }

        // Resubmission guard: only incomplete duplicates are rejected. A
        // full-length repeat of an earlier guess is accepted and appended.
        if self.buffer.len() != self.word.len()
            && self.guesses.iter().any(|g| g.text == self.buffer)
        {
            self.shake = true;
            self.pending.push(Deferred {
                due: now + SHAKE_CLEAR_DELAY,
                action: DeferredAction::ClearShake,
            });
            return SubmitOutcome::Rejected;
        }

        let index = self.guesses.len();
        let solved = self.buffer == self.word.text();

        self.guesses.push(GuessRecord {
            text: mem::take(&mut self.buffer),
            just_added: true,
        });
        self.pending.push(Deferred {
            due: now + REVEAL_CLEAR_DELAY,
            action: DeferredAction::ClearReveal(index),
        });

        if solved {
            self.phase = Phase::Completed;
            let tries = self.guesses.len();
            log::debug!("Puzzle #{} solved in {tries} tries", self.puzzle_id);
            SubmitOutcome::Solved { index, tries }
        } else {
            SubmitOutcome::Accepted { index }
        }
    }

    /// Apply every deferred action that is due at `now`
    ///
    /// Returns true if any flag changed, so callers know to redraw.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        let mut i = 0;

        while i < self.pending.len() {
            if self.pending[i].due <= now {
                let deferred = self.pending.swap_remove(i);
                match deferred.action {
                    DeferredAction::ClearShake => self.shake = false,
                    DeferredAction::ClearReveal(index) => {
                        if let Some(record) = self.guesses.get_mut(index) {
                            record.just_added = false;
                        }
                    }
                }
                changed = true;
            } else {
                i += 1;
            }
        }

        changed
    }

    /// The earliest pending deferred action, if any
    ///
    /// Event loops use this to bound their poll timeout.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|d| d.due).min()
    }

    /// The active puzzle id
    #[inline]
    #[must_use]
    pub const fn puzzle_id(&self) -> PuzzleId {
        self.puzzle_id
    }

    /// The target word
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// The in-progress guess buffer
    #[inline]
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The submitted guesses, in submission order
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    /// Current lifecycle state
    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a guess has matched the target
    #[inline]
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Completed
    }

    /// Whether the shake cue is active
    #[inline]
    #[must_use]
    pub const fn shake(&self) -> bool {
        self.shake
    }

    /// Feedback for the guess at `index`, derived on demand
    #[must_use]
    pub fn feedback_for(&self, index: usize) -> Option<Feedback> {
        self.guesses
            .get(index)
            .map(|record| Feedback::score(&record.text, &self.word))
    }

    /// Best known verdict for a letter across all submitted guesses
    ///
    /// `Correct` if any guess placed the letter correctly, `Present` if the
    /// target contains it, `Absent` if it was guessed but is not in the
    /// target, `None` if it has not been guessed. Drives keyboard hints.
    #[must_use]
    pub fn letter_hint(&self, letter: char) -> Option<Verdict> {
        let letter = letter.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() {
            return None;
        }
        let byte = letter as u8;

        let guessed = self.guesses.iter().any(|g| g.text.as_bytes().contains(&byte));
        if !guessed {
            return None;
        }

        let placed = self.guesses.iter().any(|g| {
            g.text
                .bytes()
                .enumerate()
                .any(|(i, ch)| ch == byte && self.word.bytes().get(i) == Some(&byte))
        });
        if placed {
            return Some(Verdict::Correct);
        }

        if self.word.has_letter(byte) {
            Some(Verdict::Present)
        } else {
            Some(Verdict::Absent)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn catalog() -> Catalog {
        Catalog::from_words(
            ["crane", "speed", "allot"]
                .into_iter()
                .map(|w| Word::new(w).unwrap()),
        )
    }

    fn session() -> Session {
        Session::load(&catalog(), 1).unwrap()
    }

    fn type_word(session: &mut Session, text: &str) {
        for ch in text.chars() {
            session.add_letter(ch);
        }
    }

    #[test]
    fn load_valid_id() {
        let session = session();
        assert_eq!(session.puzzle_id(), 1);
        assert_eq!(session.word().text(), "crane");
        assert_eq!(session.phase(), Phase::Active);
        assert!(session.guesses().is_empty());
        assert!(session.buffer().is_empty());
        assert!(!session.shake());
        assert!(session.next_deadline().is_none());
    }

    #[test]
    fn load_out_of_range_id() {
        let catalog = catalog();
        assert_eq!(
            Session::load(&catalog, 0),
            Err(SessionError::PuzzleNotFound(0))
        );
        assert_eq!(
            Session::load(&catalog, 4),
            Err(SessionError::PuzzleNotFound(4))
        );
    }

    #[test]
    fn add_letter_builds_buffer() {
        let mut session = session();
        session.add_letter('C');
        session.add_letter('r');
        assert_eq!(session.buffer(), "cr");
    }

    #[test]
    fn add_letter_rejects_non_alphabetic() {
        let mut session = session();
        session.add_letter('1');
        session.add_letter(' ');
        session.add_letter('!');
        session.add_letter('é');
        assert_eq!(session.buffer(), "");
    }

    #[test]
    fn add_letter_noop_when_buffer_full() {
        let mut session = session();
        type_word(&mut session, "crane");
        assert_eq!(session.buffer(), "crane");

        session.add_letter('x');
        assert_eq!(session.buffer(), "crane");
    }

    #[test]
    fn backspace_removes_last_letter() {
        let mut session = session();
        type_word(&mut session, "cr");
        session.backspace();
        assert_eq!(session.buffer(), "c");
    }

    #[test]
    fn backspace_on_empty_buffer_is_noop() {
        let mut session = session();
        session.backspace();
        assert_eq!(session.buffer(), "");
        assert_eq!(session.phase(), Phase::Active);
        assert!(session.guesses().is_empty());
    }

    #[test]
    fn submit_appends_and_clears_buffer() {
        let mut session = session();
        let now = Instant::now();

        type_word(&mut session, "adieu");
        let outcome = session.submit_guess(now);

        assert_eq!(outcome, SubmitOutcome::Accepted { index: 0 });
        assert_eq!(session.guesses().len(), 1);
        assert_eq!(session.guesses()[0].text(), "adieu");
        assert!(session.guesses()[0].just_added());
        assert!(session.buffer().is_empty());
        assert!(!session.is_completed());
    }

    #[test]
    fn submit_winning_guess_completes() {
        let mut session = session();
        let now = Instant::now();

        type_word(&mut session, "adieu");
        session.submit_guess(now);
        type_word(&mut session, "crane");
        let outcome = session.submit_guess(now);

        assert_eq!(outcome, SubmitOutcome::Solved { index: 1, tries: 2 });
        assert!(session.is_completed());
        assert_eq!(session.phase(), Phase::Completed);
    }

    #[test]
    fn no_actions_after_completion() {
        let mut session = session();
        let now = Instant::now();

        type_word(&mut session, "crane");
        session.submit_guess(now);
        assert!(session.is_completed());

        session.add_letter('x');
        assert_eq!(session.buffer(), "");
        session.backspace();
        assert_eq!(session.submit_guess(now), SubmitOutcome::Ignored);
        assert_eq!(session.guesses().len(), 1);
    }

    #[test]
    fn incomplete_duplicate_is_rejected_with_shake() {
        let mut session = session();
        let now = Instant::now();

        type_word(&mut session, "cra");
        assert_eq!(session.submit_guess(now), SubmitOutcome::Accepted { index: 0 });

        type_word(&mut session, "cra");
        let outcome = session.submit_guess(now);

        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert!(session.shake());
        // Buffer unchanged so the player can keep typing
        assert_eq!(session.buffer(), "cra");
        assert_eq!(session.guesses().len(), 1);
    }

    #[test]
    fn full_length_duplicate_is_accepted() {
        // The guard only applies to incomplete buffers; a full-length repeat
        // goes into the history again.
        let mut session = session();
        let now = Instant::now();

        type_word(&mut session, "adieu");
        session.submit_guess(now);
        type_word(&mut session, "adieu");
        let outcome = session.submit_guess(now);

        assert_eq!(outcome, SubmitOutcome::Accepted { index: 1 });
        assert_eq!(session.guesses().len(), 2);
        assert!(!session.shake());
    }

    #[test]
    fn shake_clears_after_delay() {
        let mut session = session();
        let now = Instant::now();

        type_word(&mut session, "cra");
        session.submit_guess(now);
        type_word(&mut session, "cra");
        session.submit_guess(now);
        assert!(session.shake());

        // Not yet due
        assert!(!session.tick(now + Duration::from_millis(100)));
        assert!(session.shake());

        // Due
        assert!(session.tick(now + SHAKE_CLEAR_DELAY));
        assert!(!session.shake());
    }

    #[test]
    fn reveal_clears_only_its_own_record() {
        let mut session = session();
        let now = Instant::now();

        type_word(&mut session, "adieu");
        session.submit_guess(now);

        let later = now + Duration::from_millis(1000);
        type_word(&mut session, "slate");
        session.submit_guess(later);

        // First reveal due, second still pending
        assert!(session.tick(now + REVEAL_CLEAR_DELAY));
        assert!(!session.guesses()[0].just_added());
        assert!(session.guesses()[1].just_added());

        assert!(session.tick(later + REVEAL_CLEAR_DELAY));
        assert!(!session.guesses()[1].just_added());
        assert!(session.next_deadline().is_none());
    }

    #[test]
    fn next_deadline_is_earliest_pending() {
        let mut session = session();
        let now = Instant::now();

        type_word(&mut session, "adieu");
        session.submit_guess(now);
        type_word(&mut session, "cra");
        session.submit_guess(now);
        type_word(&mut session, "cra");
        session.submit_guess(now);

        // Shake (500ms) is earlier than reveal (1500ms)
        assert_eq!(session.next_deadline(), Some(now + SHAKE_CLEAR_DELAY));
    }

    #[test]
    fn reload_discards_pending_actions() {
        let mut session = session();
        let now = Instant::now();

        type_word(&mut session, "adieu");
        session.submit_guess(now);
        assert!(session.next_deadline().is_some());

        // Navigating to another puzzle replaces the session; nothing pends
        session = Session::load(&catalog(), 2).unwrap();
        assert!(session.next_deadline().is_none());
        assert!(session.guesses().is_empty());
        assert_eq!(session.word().text(), "speed");
    }

    #[test]
    fn feedback_for_derives_verdicts() {
        let mut session = session();
        let now = Instant::now();

        type_word(&mut session, "adieu");
        session.submit_guess(now);

        let feedback = session.feedback_for(0).unwrap();
        assert_eq!(
            feedback.verdicts(),
            &[
                Verdict::Present,
                Verdict::Absent,
                Verdict::Absent,
                Verdict::Present,
                Verdict::Absent,
            ]
        );
        assert!(session.feedback_for(1).is_none());
    }

    #[test]
    fn letter_hints_track_guesses() {
        let mut session = session();
        let now = Instant::now();

        assert_eq!(session.letter_hint('c'), None);

        type_word(&mut session, "adieu");
        session.submit_guess(now);

        assert_eq!(session.letter_hint('a'), Some(Verdict::Present));
        assert_eq!(session.letter_hint('d'), Some(Verdict::Absent));
        assert_eq!(session.letter_hint('c'), None);

        type_word(&mut session, "crate");
        session.submit_guess(now);

        assert_eq!(session.letter_hint('c'), Some(Verdict::Correct));
        assert_eq!(session.letter_hint('A'), Some(Verdict::Correct));
        assert_eq!(session.letter_hint('t'), Some(Verdict::Absent));
    }

    #[test]
    fn empty_buffer_submit_is_accepted_once() {
        // An empty buffer is incomplete; the first submission is appended,
        // the second matches it and shakes.
        let mut session = session();
        let now = Instant::now();

        assert_eq!(session.submit_guess(now), SubmitOutcome::Accepted { index: 0 });
        assert_eq!(session.guesses()[0].text(), "");
        assert_eq!(session.submit_guess(now), SubmitOutcome::Rejected);
        assert!(session.shake());
    }
}
