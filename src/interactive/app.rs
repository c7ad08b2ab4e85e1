//! TUI application state and logic

use crate::catalog::{Catalog, PuzzleId};
use crate::session::{Session, SubmitOutcome};
use crate::store::CompletionStore;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Poll timeout when no deferred action is pending
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Which view is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Puzzle index with solved badges
    Index,
    /// An active or completed puzzle session
    Game,
    /// Navigation to an unknown puzzle id
    NotFound { id: PuzzleId },
}

/// Application state
pub struct App<S: CompletionStore> {
    pub catalog: Catalog,
    pub store: S,
    pub session: Option<Session>,
    pub screen: Screen,
    pub selected: usize,
    pub should_quit: bool,
}

impl<S: CompletionStore> App<S> {
    #[must_use]
    pub fn new(catalog: Catalog, store: S) -> Self {
        Self {
            catalog,
            store,
            session: None,
            screen: Screen::Index,
            selected: 0,
            should_quit: false,
        }
    }

    /// Navigate to a puzzle by id
    ///
    /// An unknown id shows the not-found screen; the previous session, if
    /// any, is left untouched.
    pub fn open_puzzle(&mut self, id: PuzzleId) {
        match Session::load(&self.catalog, id) {
            Ok(session) => {
                self.session = Some(session);
                self.screen = Screen::Game;
            }
            Err(e) => {
                log::debug!("{e}");
                self.screen = Screen::NotFound { id };
            }
        }
    }

    /// Open the puzzle currently highlighted on the index
    pub fn open_selected(&mut self) {
        self.open_puzzle(self.selected + 1);
    }

    /// Return to the index screen
    ///
    /// Drops the session (and any pending deferred actions with it).
    pub fn back_to_index(&mut self) {
        self.session = None;
        self.screen = Screen::Index;
    }

    /// Apply due deferred actions; returns true if a redraw is needed
    pub fn tick(&mut self, now: Instant) -> bool {
        self.session.as_mut().is_some_and(|s| s.tick(now))
    }

    /// Deadline of the earliest pending deferred action
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.session.as_ref().and_then(Session::next_deadline)
    }

    /// Dispatch a key event to the current screen
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Index => self.handle_index_key(key),
            Screen::Game => self.handle_game_key(key),
            Screen::NotFound { .. } => self.handle_not_found_key(key),
        }
    }

    fn handle_index_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.catalog.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Enter => {
                self.open_selected();
            }
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        let Some(session) = self.session.as_mut() else {
            self.screen = Screen::Index;
            return;
        };

        match key.code {
            KeyCode::Esc => {
                self.back_to_index();
            }
            KeyCode::Char(c) => {
                session.add_letter(c);
            }
            KeyCode::Backspace => {
                session.backspace();
            }
            KeyCode::Enter => {
                let outcome = session.submit_guess(Instant::now());
                if let SubmitOutcome::Solved { tries, .. } = outcome {
                    let id = session.puzzle_id();
                    if let Err(e) = self.store.record_solve(id, tries) {
                        log::error!("Failed to record completion for puzzle #{id}: {e}");
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_not_found_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.back_to_index();
            }
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui<S: CompletionStore>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: CompletionStore>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Wake up in time for the next transient-flag clear
        let timeout = app
            .next_deadline()
            .map_or(IDLE_POLL, |deadline| {
                deadline.saturating_duration_since(Instant::now())
            });

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
