//! Domain types for the testnav browser.
//!
//! - [`entry`] - Classified filesystem items shown in a listing
//! - [`result`] - Outcome of one external test run
//!
//! All public types are re-exported at the crate root:
//!
//! ```
//! use tn_core::{Entry, EntryKind, ExecutionResult};
//! ```

mod entry;
mod result;

pub use entry::{Entry, EntryKind};
pub use result::ExecutionResult;
