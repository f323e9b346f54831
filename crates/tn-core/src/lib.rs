//! Core types, configuration, and path helpers for the testnav browser.
//!
//! This crate provides the foundational types shared across the workspace:
//!
//! - Domain types ([`Entry`], [`EntryKind`], [`ExecutionResult`])
//! - Configuration structures ([`Config`] and its sections)
//! - The [`ConfigError`] type for configuration failures
//! - Session-root aware path navigation ([`parent_within`])

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod paths;
pub mod types;

pub use config::{ColorScheme, Config, RunConfig, ScanConfig, TuiConfig};
pub use error::ConfigError;
pub use paths::{check_root, is_session_root, parent_within, PARENT_MARKER};
pub use types::{Entry, EntryKind, ExecutionResult};
