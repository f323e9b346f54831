//! Session state and the interaction state machine.
//!
//! [`App`] is owned by the event loop and mutated only there. Every event
//! goes through [`App::handle_event`], which may hand back a [`Task`] for
//! the loop to dispatch.
//!
//! # State machine
//!
//! ```text
//!            start / navigate / refresh / run
//!   ┌──────────┐ ───────────────────────────► ┌─────────┐
//!   │ Browsing │                              │ Loading │
//!   └──────────┘ ◄─────────────────────────── └─────────┘
//!        ▲         ScanCompleted / ScanFailed      │
//!        │                                         │ RunCompleted
//!        │ dismiss      ┌───────────────┐          │
//!        └───────────── │ ShowingResult │ ◄────────┘
//!                       └───────────────┘
//! ```
//!
//! Quitting is possible from every state and is the only way out.

use camino::{Utf8Path, Utf8PathBuf};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tn_core::{parent_within, Entry, ExecutionResult};
use tracing::{debug, info};

use crate::action::Action;
use crate::event::Event;
use crate::task::{Task, Ticket};

/// The current mode of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// A scan or run is in flight.
    #[default]
    Loading,

    /// The listing is shown and accepts navigation.
    Browsing,

    /// The outcome of the last run is shown.
    ShowingResult,
}

impl Mode {
    /// Returns a short label for the status bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Loading => "LOADING",
            Self::Browsing => "BROWSE",
            Self::ShowingResult => "RESULT",
        }
    }
}

/// The session state.
#[derive(Debug)]
pub struct App {
    /// Session root; navigation never leaves it.
    root: Utf8PathBuf,

    /// Directory whose listing is shown.
    current_dir: Utf8PathBuf,

    /// Listing of `current_dir`, in scanner order.
    entries: Vec<Entry>,

    /// Index of the selected entry.
    cursor: usize,

    /// Current mode.
    pub mode: Mode,

    /// Message from the most recent failed scan.
    pub last_error: Option<String>,

    /// Outcome of the most recent run.
    result: Option<ExecutionResult>,

    /// The one background task whose completion is awaited.
    pending: Option<Ticket>,

    /// Ticket for the next dispatched task.
    next_ticket: Ticket,

    /// Whether the application should quit.
    pub should_quit: bool,

    /// Frame counter for the loading indicator.
    spinner: usize,
}

impl App {
    /// Creates a session rooted at `root`, starting in [`Mode::Loading`].
    #[must_use]
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        let root = root.into();
        Self {
            current_dir: root.clone(),
            root,
            entries: Vec::new(),
            cursor: 0,
            mode: Mode::Loading,
            last_error: None,
            result: None,
            pending: None,
            next_ticket: Ticket::new(0),
            should_quit: false,
            spinner: 0,
        }
    }

    /// Issues the initial scan of the root directory.
    #[must_use]
    pub fn start(&mut self) -> Task {
        info!(root = %self.root, "Starting session");
        self.scan(self.current_dir.clone())
    }

    // =========================================================================
    // Event handling
    // =========================================================================

    /// Applies one event and returns the task it requests, if any.
    #[must_use]
    pub fn handle_event(&mut self, event: Event) -> Option<Task> {
        if let Some(ticket) = event.ticket() {
            if !self.settle(ticket) {
                return None;
            }
        }

        match event {
            Event::Key(key) => {
                let action = self.handle_key(key);
                self.update(action)
            }
            Event::Tick => self.update(Action::Tick),
            Event::Resize { .. } | Event::Render => None,
            Event::ScanCompleted { entries, .. } => {
                debug!(directory = %self.current_dir, entries = entries.len(), "Listing replaced");
                self.entries = entries;
                self.cursor = 0;
                self.last_error = None;
                self.mode = Mode::Browsing;
                None
            }
            Event::ScanFailed { message, .. } => {
                debug!(directory = %self.current_dir, error = %message, "Scan failed");
                self.last_error = Some(message);
                self.clamp_cursor();
                self.mode = Mode::Browsing;
                None
            }
            Event::RunCompleted { result, .. } => {
                debug!(path = %result.path(), succeeded = result.succeeded(), "Run finished");
                self.result = Some(result);
                self.mode = Mode::ShowingResult;
                None
            }
        }
    }

    /// Handles a key event and returns the resulting action.
    #[must_use]
    pub fn handle_key(&self, key: KeyEvent) -> Action {
        // Global quit handling
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match self.mode {
            Mode::Loading => Self::handle_loading_key(key),
            Mode::Browsing => Self::handle_browsing_key(key),
            Mode::ShowingResult => Self::handle_result_key(key),
        }
    }

    fn handle_loading_key(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        }
    }

    fn handle_browsing_key(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
            KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
            KeyCode::Char('l') | KeyCode::Enter | KeyCode::Right => Action::Activate,
            KeyCode::Char('h') | KeyCode::Backspace | KeyCode::Left => Action::GoToParent,
            KeyCode::Char('r') => Action::Refresh,
            KeyCode::Char('t') => Action::RunSelected,
            _ => Action::None,
        }
    }

    fn handle_result_key(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Dismiss,
            _ => Action::None,
        }
    }

    /// Updates the session based on an action.
    ///
    /// Actions that do not apply to the current mode are ignored.
    #[must_use]
    pub fn update(&mut self, action: Action) -> Option<Task> {
        match action {
            Action::Quit => {
                info!("Quit requested");
                self.should_quit = true;
                None
            }
            Action::Tick => {
                self.tick();
                None
            }
            Action::Dismiss => {
                if self.mode == Mode::ShowingResult {
                    self.result = None;
                    self.mode = Mode::Browsing;
                }
                None
            }
            Action::None => None,
            _ if self.mode != Mode::Browsing => None,
            Action::MoveUp => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            Action::MoveDown => {
                if self.cursor + 1 < self.entries.len() {
                    self.cursor += 1;
                }
                None
            }
            Action::Activate => self.activate(),
            Action::RunSelected => self.run_selected(),
            Action::Refresh => {
                self.cursor = 0;
                Some(self.scan(self.current_dir.clone()))
            }
            Action::GoToParent => {
                let parent = parent_within(&self.current_dir, &self.root)?;
                Some(self.navigate(parent))
            }
        }
    }

    /// Advances the loading indicator.
    pub fn tick(&mut self) {
        if self.mode == Mode::Loading {
            self.spinner = self.spinner.wrapping_add(1);
        }
    }

    fn activate(&mut self) -> Option<Task> {
        let entry = self.selected()?;
        if entry.is_dir {
            let path = entry.path.clone();
            Some(self.navigate(path))
        } else if entry.is_runnable {
            let path = entry.path.clone();
            Some(self.run(path))
        } else {
            None
        }
    }

    fn run_selected(&mut self) -> Option<Task> {
        let entry = self.selected()?;
        if entry.is_runnable && !entry.is_parent_link() {
            let path = entry.path.clone();
            Some(self.run(path))
        } else {
            None
        }
    }

    fn navigate(&mut self, directory: Utf8PathBuf) -> Task {
        debug!(from = %self.current_dir, to = %directory, "Navigating");
        self.current_dir.clone_from(&directory);
        self.cursor = 0;
        self.scan(directory)
    }

    fn scan(&mut self, directory: Utf8PathBuf) -> Task {
        let ticket = self.issue();
        Task::Scan { ticket, directory }
    }

    fn run(&mut self, path: Utf8PathBuf) -> Task {
        self.result = None;
        let ticket = self.issue();
        Task::Run { ticket, path }
    }

    /// Reserves a ticket for a new task and enters [`Mode::Loading`].
    fn issue(&mut self) -> Ticket {
        let ticket = self.next_ticket;
        self.next_ticket = ticket.next();
        self.pending = Some(ticket);
        self.mode = Mode::Loading;
        ticket
    }

    /// Accepts the completion for `ticket` if it is the pending task.
    fn settle(&mut self, ticket: Ticket) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            true
        } else {
            debug!(%ticket, pending = ?self.pending, "Discarding stale completion");
            false
        }
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.entries.len().saturating_sub(1));
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the directory being browsed.
    #[must_use]
    pub fn current_dir(&self) -> &Utf8Path {
        &self.current_dir
    }

    /// Returns the current listing.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns the cursor position.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the entry under the cursor, if the listing is not empty.
    #[must_use]
    pub fn selected(&self) -> Option<&Entry> {
        self.entries.get(self.cursor)
    }

    /// Returns the result being shown, if any.
    #[must_use]
    pub const fn result(&self) -> Option<&ExecutionResult> {
        self.result.as_ref()
    }

    /// Returns the loading indicator frame counter.
    #[must_use]
    pub const fn spinner(&self) -> usize {
        self.spinner
    }
}
