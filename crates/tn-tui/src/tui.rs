//! Terminal wrapper with async event streaming.
//!
//! This module provides the [`Tui`] struct which wraps a Ratatui terminal
//! and feeds crossterm input, together with tick and render timers, into a
//! tokio channel.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────── event loop task ────────────────────────┐
//! │  EventStream ─┐                                                 │
//! │  tick timer  ─┼─► select! ─► Event ─► mpsc::Sender ─────────┐   │
//! │  render timer ┘                                             │   │
//! └─────────────────────────────────────────────────────────────│───┘
//!                                                               │
//!            TaskDispatcher ── completion Event ────────────────┤
//!                                                               ▼
//!                                     Tui::next_event ◄── mpsc::Receiver
//! ```

use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::{EventStream, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, trace, warn};

use crate::error::TuiError;
use crate::event::Event;

/// Default channel capacity for events.
const EVENT_CHANNEL_CAPACITY: usize = 100;

/// Set while a [`Tui`] holds raw mode and the alternate screen.
static TERMINAL_OWNED: AtomicBool = AtomicBool::new(false);

/// Returns `true` while the session owns the terminal.
///
/// Anything written to stdout or stderr in that window lands on top of the
/// rendered frame, so log writers check this before writing.
#[must_use]
pub fn owns_terminal() -> bool {
    TERMINAL_OWNED.load(Ordering::Acquire)
}

/// Terminal wrapper with async event streaming.
///
/// Manages the terminal state (raw mode, alternate screen) and provides
/// an async interface for receiving terminal and application events.
pub struct Tui {
    /// The underlying Ratatui terminal.
    terminal: Terminal<CrosstermBackend<Stdout>>,

    /// Receiver for events from the event loop task and background tasks.
    event_rx: mpsc::Receiver<Event>,

    /// Sender handed to background tasks for their completions.
    event_tx: mpsc::Sender<Event>,

    /// Handle to the event loop task.
    task: Option<JoinHandle<()>>,

    /// Token for cancelling the event loop.
    cancellation_token: CancellationToken,

    /// Whether raw mode and the alternate screen are active.
    entered: bool,

    /// Frame rate for rendering (frames per second).
    frame_rate: f64,

    /// Tick rate for periodic updates (ticks per second).
    tick_rate: f64,
}

impl Tui {
    /// Creates a new TUI with the specified tick rate in ticks per second.
    ///
    /// The terminal is not entered yet; call [`enter()`](Self::enter) to
    /// initialize raw mode and the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be initialized.
    pub fn new(tick_rate: f64) -> Result<Self, TuiError> {
        if !(tick_rate.is_finite() && tick_rate > 0.0) {
            return Err(TuiError::config(format!("invalid tick rate: {tick_rate}")));
        }

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let cancellation_token = CancellationToken::new();

        debug!(tick_rate, "Created TUI");

        Ok(Self {
            terminal,
            event_rx,
            event_tx,
            task: None,
            cancellation_token,
            entered: false,
            frame_rate: 30.0,
            tick_rate,
        })
    }

    /// Sets the frame rate for rendering.
    ///
    /// Non-positive values are ignored.
    #[must_use]
    pub fn with_frame_rate(mut self, fps: f64) -> Self {
        if fps.is_finite() && fps > 0.0 {
            self.frame_rate = fps;
        }
        self
    }

    /// Returns the event sender for injecting external events.
    ///
    /// Background tasks use this to deliver their completion events into
    /// the same queue as terminal input.
    #[must_use]
    pub fn event_sender(&self) -> mpsc::Sender<Event> {
        self.event_tx.clone()
    }

    /// Enters the terminal (raw mode, alternate screen).
    ///
    /// This must be called before drawing to the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal mode cannot be changed.
    pub fn enter(&mut self) -> Result<(), TuiError> {
        debug!("Entering terminal");

        enable_raw_mode()?;
        self.entered = true;
        TERMINAL_OWNED.store(true, Ordering::Release);
        io::stdout().execute(EnterAlternateScreen)?;

        self.terminal.hide_cursor()?;
        self.terminal.clear()?;

        self.start_event_loop();

        debug!("Terminal entered");
        Ok(())
    }

    /// Exits the terminal (restores normal mode).
    ///
    /// Calling this more than once, or without a prior
    /// [`enter()`](Self::enter), does nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal mode cannot be restored.
    pub fn exit(&mut self) -> Result<(), TuiError> {
        self.stop_event_loop();

        if !self.entered {
            return Ok(());
        }
        debug!("Exiting terminal");
        self.entered = false;

        self.terminal.show_cursor()?;
        io::stdout().execute(LeaveAlternateScreen)?;
        disable_raw_mode()?;
        TERMINAL_OWNED.store(false, Ordering::Release);

        debug!("Terminal exited");
        Ok(())
    }

    /// Draws to the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing fails.
    pub fn draw<F>(&mut self, f: F) -> Result<(), TuiError>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }

    /// Returns the next event from the event loop.
    ///
    /// Returns `None` if the event channel is closed.
    pub async fn next_event(&mut self) -> Option<Event> {
        self.event_rx.recv().await
    }

    /// Starts the event loop in a background task.
    fn start_event_loop(&mut self) {
        let tick_delay = Duration::from_secs_f64(1.0 / self.tick_rate);
        let render_delay = Duration::from_secs_f64(1.0 / self.frame_rate);

        let event_tx = self.event_tx.clone();
        let cancellation_token = self.cancellation_token.clone();

        debug!(
            tick_delay_ms = tick_delay.as_millis(),
            render_delay_ms = render_delay.as_millis(),
            "Starting event loop"
        );

        let task = tokio::spawn(async move {
            let mut reader = EventStream::new();
            let mut tick_interval = tokio::time::interval(tick_delay);
            let mut render_interval = tokio::time::interval(render_delay);

            tick_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            render_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            loop {
                let event = tokio::select! {
                    () = cancellation_token.cancelled() => {
                        debug!("Event loop cancelled");
                        break;
                    }
                    _ = tick_interval.tick() => Some(Event::Tick),
                    _ = render_interval.tick() => Some(Event::Render),
                    event = Self::read_crossterm_event(&mut reader) => event,
                };

                if let Some(event) = event {
                    trace!(?event, "Sending event");
                    if event_tx.send(event).await.is_err() {
                        error!("Event channel closed");
                        break;
                    }
                }
            }

            debug!("Event loop ended");
        });

        self.task = Some(task);
    }

    /// Stops the event loop.
    fn stop_event_loop(&mut self) {
        self.cancellation_token.cancel();

        if let Some(task) = self.task.take() {
            debug!("Stopping event loop");
            task.abort();
        }
    }

    /// Reads a crossterm event and converts it to our Event type.
    async fn read_crossterm_event(reader: &mut EventStream) -> Option<Event> {
        use futures_util::StreamExt;

        match reader.next().await {
            Some(Ok(event)) => convert_crossterm_event(&event),
            Some(Err(e)) => {
                warn!(error = %e, "Error reading terminal event");
                None
            }
            None => {
                debug!("Event stream ended");
                None
            }
        }
    }
}

/// Converts a crossterm event to our Event type.
///
/// Only key presses and resizes matter to the session; key releases,
/// mouse input, focus changes, and pastes are dropped.
fn convert_crossterm_event(event: &crossterm::event::Event) -> Option<Event> {
    use crossterm::event::Event as CrosstermEvent;

    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(*key)),
        CrosstermEvent::Resize(width, height) => Some(Event::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Attempt to restore terminal on drop
        if let Err(e) = self.exit() {
            error!(error = %e, "Failed to restore terminal on drop");
        }
    }
}
