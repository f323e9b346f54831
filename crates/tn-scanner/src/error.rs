//! Error types for the tn-scanner crate.
//!
//! This module provides the [`ScanError`] type for errors that can occur
//! while listing a directory.

use camino::Utf8PathBuf;

/// Errors that can occur during a scan.
///
/// Every variant is fatal for the scan that produced it: a scan either
/// returns a complete listing or one of these errors, never a partial
/// listing.
///
/// # Examples
///
/// ```
/// use tn_scanner::ScanError;
///
/// fn describe(err: &ScanError) -> String {
///     match err {
///         ScanError::ReadDir { path, .. } => format!("cannot list {path}"),
///         ScanError::NonUtf8Path(p) => format!("bad name {}", p.display()),
///     }
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Failed to read a directory.
    ///
    /// Covers missing directories, permission failures, and paths that are
    /// not directories.
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        /// The directory that couldn't be read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A path is not valid UTF-8.
    ///
    /// This crate uses UTF-8 paths throughout. If a non-UTF-8 path is
    /// encountered, it cannot be listed.
    #[error("path is not valid UTF-8: {}", _0.display())]
    NonUtf8Path(std::path::PathBuf),
}

impl ScanError {
    /// Creates a new [`ScanError::ReadDir`] error.
    #[inline]
    pub fn read_dir(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::ReadDir {
            path: path.into(),
            source,
        }
    }
}
