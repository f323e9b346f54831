//! Execution of the external test command for testnav.
//!
//! [`Invoker::run`] takes a listed entry's path and blocks until the test
//! command finishes, returning an [`ExecutionResult`](tn_core::ExecutionResult)
//! with the combined output. Launch failures and non-zero exits are folded
//! into a failed result rather than returned as errors, so callers can
//! present every outcome the same way.
//!
//! Runs are blocking; the TUI moves them onto the blocking thread pool.

#![deny(clippy::all)]
#![warn(missing_docs)]

mod command;
mod error;
mod invoker;

pub use command::RunTarget;
pub use error::RunError;
pub use invoker::Invoker;
