//! Interactive terminal browser for discovering and running tests.
//!
//! This crate wires the scanner and the invoker into a Ratatui session:
//! an async event loop on tokio, a single-owner state machine ([`App`]),
//! background tasks for every blocking operation ([`TaskDispatcher`]), and
//! stateless widgets for rendering.
//!
//! # Architecture
//!
//! ```text
//! crates/tn-tui/src/
//!   lib.rs           # run() and the main event loop
//!   app.rs           # Session state and the state machine
//!   action.rs        # User actions (commands from key bindings)
//!   event.rs         # Event types (Key, Tick, Render, completions)
//!   task.rs          # Ticketed background scans and runs
//!   tui.rs           # Terminal wrapper with async event streaming
//!   ui.rs            # Layout and per-mode rendering
//!   theme.rs         # Color scheme, entry styles, and icons
//!   error.rs         # TUI-specific error types
//!   components/
//!     header.rs      # HeaderBar
//!     entry_list.rs  # EntryList
//!     loading.rs     # LoadingView
//!     result_view.rs # ResultView
//!     status_bar.rs  # StatusBar
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use camino::Utf8PathBuf;
//! use tn_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tn_tui::TuiError> {
//!     tn_tui::run(Config::default(), Utf8PathBuf::from(".")).await
//! }
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod action;
pub mod app;
pub mod components;
pub mod error;
pub mod event;
pub mod task;
pub mod theme;
pub mod tui;
pub mod ui;

use camino::Utf8PathBuf;
use tn_core::Config;
use tn_runner::Invoker;
use tn_scanner::Scanner;
use tracing::info;

pub use action::Action;
pub use app::{App, Mode};
pub use error::TuiError;
pub use event::Event;
pub use task::{Task, TaskDispatcher, Ticket};
pub use theme::Theme;
pub use tui::{owns_terminal, Tui};

/// Runs an interactive session rooted at `root` until the user quits.
///
/// The terminal is restored before this returns, whether the session
/// ended normally or with an error.
///
/// # Errors
///
/// Returns an error if the terminal cannot be initialized, drawn to, or
/// restored, or if the configuration carries unusable timing values.
pub async fn run(config: Config, root: Utf8PathBuf) -> Result<(), TuiError> {
    if config.tui.tick_rate_ms == 0 {
        return Err(TuiError::config("tick_rate_ms must be positive"));
    }
    // tick_rate_ms and frame_rate are small UI timing values, precision loss is acceptable
    #[allow(clippy::cast_precision_loss)]
    let tick_rate = 1000.0 / config.tui.tick_rate_ms as f64;
    let frame_rate = f64::from(config.tui.frame_rate);

    let mut tui = Tui::new(tick_rate)?.with_frame_rate(frame_rate);

    let scanner = Scanner::new(&root, config.scan);
    let invoker = Invoker::new(config.run);
    let dispatcher = TaskDispatcher::new(scanner, invoker, tui.event_sender());
    let theme = Theme::from_scheme(config.tui.color_scheme);

    let mut app = App::new(root);

    tui.enter()?;

    dispatcher.dispatch(app.start());

    info!("Entering main event loop");
    let result = run_event_loop(&mut tui, &mut app, &dispatcher, &theme).await;

    // Exit terminal (restore state)
    tui.exit()?;

    result
}

/// Runs the main event loop.
///
/// Each iteration draws the current state, then waits for and settles
/// exactly one event.
async fn run_event_loop(
    tui: &mut Tui,
    app: &mut App,
    dispatcher: &TaskDispatcher,
    theme: &Theme,
) -> Result<(), TuiError> {
    loop {
        tui.draw(|frame| ui::render(app, frame, theme))?;

        let Some(event) = tui.next_event().await else {
            return Err(TuiError::ChannelClosed);
        };

        if let Some(task) = app.handle_event(event) {
            dispatcher.dispatch(task);
        }

        if app.should_quit {
            info!("Leaving main event loop");
            return Ok(());
        }
    }
}
