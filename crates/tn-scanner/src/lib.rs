//! Directory scanner that turns one directory into a classified listing.
//!
//! The main entry point is [`Scanner`]. A scan lists the immediate children
//! of a directory, drops hidden entries and the vendoring directory, keeps
//! every remaining directory (marking it runnable when it directly holds a
//! test file), and keeps files only when they are test files.
//!
//! # Example
//!
//! ```ignore
//! use camino::Utf8Path;
//! use tn_core::ScanConfig;
//! use tn_scanner::Scanner;
//!
//! let scanner = Scanner::new(Utf8Path::new("."), ScanConfig::default());
//! for entry in scanner.scan(Utf8Path::new("."))? {
//!     println!("{} runnable={}", entry.name, entry.is_runnable);
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Scanner::scan(dir)
//!     │
//!     ├── parent_within(dir, root)   -> optional ".." entry
//!     │
//!     └── read_children(dir)         (depth 1)
//!             │
//!             └── contains_test_file(child)   (depth 2, directories only)
//! ```
//!
//! Scans are blocking and are meant to run on a blocking thread pool; the
//! scanner holds no shared state and is cheap to clone into a task.

#![deny(clippy::all)]
#![warn(missing_docs)]

mod error;
mod listing;

pub use error::ScanError;

use camino::{Utf8Path, Utf8PathBuf};
use tn_core::{parent_within, Entry, ScanConfig};
use tracing::{debug, trace};

use crate::listing::{contains_test_file, read_children};

/// Lists directories and classifies their children.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use tn_core::ScanConfig;
/// use tn_scanner::Scanner;
///
/// let scanner = Scanner::new(Utf8Path::new("/srv/project"), ScanConfig::default());
/// let listing = scanner.scan(Utf8Path::new("/srv/project/missing"));
/// assert!(listing.is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Scanner {
    /// Session root; listings below it start with a parent entry.
    root: Utf8PathBuf,
    /// Discovery policy.
    config: ScanConfig,
}

impl Scanner {
    /// Creates a scanner for the session rooted at `root`.
    #[must_use]
    pub fn new(root: &Utf8Path, config: ScanConfig) -> Self {
        Self {
            root: root.to_owned(),
            config,
        }
    }

    /// Produces the listing for `directory`.
    ///
    /// The listing starts with a `..` entry unless `directory` is the
    /// session root, followed by the eligible children in name order.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::ReadDir`] if `directory`, or any of its
    /// directory children, cannot be read, and [`ScanError::NonUtf8Path`]
    /// if a child's name is not UTF-8. No partial listing is returned.
    pub fn scan(&self, directory: &Utf8Path) -> Result<Vec<Entry>, ScanError> {
        let children = read_children(directory, self.config.follow_links)?;

        let mut entries = Vec::with_capacity(children.len() + 1);
        if let Some(parent) = parent_within(directory, &self.root) {
            entries.push(Entry::parent(parent));
        }

        for child in children {
            if self.config.is_hidden(&child.name) {
                trace!(path = %child.path, "Skipping hidden entry");
                continue;
            }

            if child.is_dir {
                if self.config.is_vendor_dir(&child.name) {
                    trace!(path = %child.path, "Skipping vendor directory");
                    continue;
                }
                let has_tests = contains_test_file(&child.path, &self.config)?;
                entries.push(Entry::directory(child.path, has_tests));
            } else if self.config.is_test_file_name(&child.name) {
                entries.push(Entry::test_file(child.path));
            }
        }

        debug_assert!(entries.iter().all(Entry::is_listable));
        debug!(
            directory = %directory,
            entries = entries.len(),
            "Scan complete"
        );

        Ok(entries)
    }
}
