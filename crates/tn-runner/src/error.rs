//! Error types for the tn-runner crate.
//!
//! [`RunError`] never crosses the [`Invoker`](crate::Invoker) boundary as an
//! error value; its `Display` output becomes the error text of a failed
//! [`ExecutionResult`](tn_core::ExecutionResult).

use std::process::ExitStatus;

/// Reasons a test run did not succeed.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The test command could not be started.
    #[error("failed to launch `{program}`: {source}")]
    Launch {
        /// The program that was launched.
        program: String,
        /// The underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// The command started but its output or exit status was lost.
    #[error("failed to collect test output: {0}")]
    Capture(#[source] std::io::Error),

    /// The test command ran and exited unsuccessfully.
    #[error("{0}")]
    Exit(ExitStatus),
}

impl RunError {
    /// Creates a new [`RunError::Launch`] error.
    #[inline]
    pub fn launch(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::Launch {
            program: program.into(),
            source,
        }
    }
}
