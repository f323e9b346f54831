//! Error types for the tn-core crate.

use camino::Utf8PathBuf;

/// Errors raised while preparing a browsing session.
///
/// Covers the start directory check and loading of the JSON configuration
/// file. Both happen before the terminal is taken over, so these errors are
/// reported on stderr by the binary.
///
/// # Examples
///
/// ```
/// use tn_core::ConfigError;
/// use camino::Utf8PathBuf;
///
/// let error = ConfigError::MissingRoot(Utf8PathBuf::from("/some/path"));
/// assert_eq!(error.to_string(), "Path does not exist: /some/path");
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The start directory does not exist.
    #[error("Path does not exist: {0}")]
    MissingRoot(Utf8PathBuf),

    /// The start path exists but is a file or something else.
    #[error("Path is not a directory: {0}")]
    RootNotDirectory(Utf8PathBuf),

    /// An option holds a value the browser cannot work with.
    #[error("invalid configuration option '{option}': {reason}")]
    InvalidOption {
        /// Dotted option name, e.g. `scan.test_suffix`.
        option: String,
        /// What is wrong with the value.
        reason: String,
    },

    /// The configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid JSON for [`Config`](crate::Config).
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    /// Creates a new [`ConfigError::InvalidOption`] error.
    #[must_use]
    pub fn invalid_option(option: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOption {
            option: option.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_errors_display() {
        let missing = ConfigError::MissingRoot(Utf8PathBuf::from("/missing/dir"));
        assert_eq!(missing.to_string(), "Path does not exist: /missing/dir");

        let file = ConfigError::RootNotDirectory(Utf8PathBuf::from("calc_test.go"));
        assert_eq!(file.to_string(), "Path is not a directory: calc_test.go");
    }

    #[test]
    fn test_invalid_option_display() {
        let error = ConfigError::invalid_option("run.program", "must not be empty");
        let msg = error.to_string();
        assert!(msg.contains("run.program"));
        assert!(msg.contains("must not be empty"));
    }
}
