//! Event types for the TUI event loop.
//!
//! This module provides the [`Event`] enum representing everything the
//! session reacts to.
//!
//! # Event Sources
//!
//! Events originate from two places and share one channel:
//!
//! - **Terminal**: key presses and window resizing, plus tick and render
//!   timers, produced by [`Tui`](crate::Tui)
//! - **Background tasks**: exactly one completion per dispatched
//!   [`Task`](crate::Task), produced by [`TaskDispatcher`](crate::TaskDispatcher)

use crossterm::event::KeyEvent;
use tn_core::{Entry, ExecutionResult};

use crate::task::Ticket;

/// Events that can be processed by the TUI.
#[derive(Debug)]
#[non_exhaustive]
pub enum Event {
    /// A key press event from the terminal.
    Key(KeyEvent),

    /// Terminal window was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },

    /// Periodic tick, drives the loading spinner.
    Tick,

    /// Signal to render a new frame.
    Render,

    /// A scan finished with a listing.
    ScanCompleted {
        /// The task this completes.
        ticket: Ticket,
        /// The new listing.
        entries: Vec<Entry>,
    },

    /// A scan failed.
    ScanFailed {
        /// The task this completes.
        ticket: Ticket,
        /// Human-readable reason.
        message: String,
    },

    /// A test run finished, successfully or not.
    RunCompleted {
        /// The task this completes.
        ticket: Ticket,
        /// Outcome of the run.
        result: ExecutionResult,
    },
}

impl Event {
    /// Returns the ticket of a completion event.
    #[must_use]
    pub const fn ticket(&self) -> Option<Ticket> {
        match self {
            Self::ScanCompleted { ticket, .. }
            | Self::ScanFailed { ticket, .. }
            | Self::RunCompleted { ticket, .. } => Some(*ticket),
            Self::Key(_) | Self::Resize { .. } | Self::Tick | Self::Render => None,
        }
    }
}
