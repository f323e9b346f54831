//! Configuration structures for the testnav browser.
//!
//! This module provides configuration types for all components of the application:
//!
//! - [`ScanConfig`] - Discovery policy (test-file naming, skipped directories)
//! - [`RunConfig`] - The external test command and its arguments
//! - [`TuiConfig`] - Terminal UI settings (tick rate, frame rate, colors)
//! - [`Config`] - Root configuration combining all settings
//!
//! All configuration types implement [`Default`] with values suited to Go
//! projects (`*_test.go` files executed with `go test -v`).

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Color scheme for the TUI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ColorScheme {
    /// Automatically detect based on terminal settings.
    #[default]
    Auto,
    /// Light color scheme (dark text on light background).
    Light,
    /// Dark color scheme (light text on dark background).
    Dark,
    /// No colors, only text attributes.
    Monochrome,
}

/// Configuration for test discovery.
///
/// Controls which directory children are listed and which of them count as
/// runnable test units.
///
/// # Examples
///
/// ```
/// use tn_core::ScanConfig;
///
/// let config = ScanConfig::default();
/// assert_eq!(config.test_suffix, "_test.go");
/// assert_eq!(config.vendor_dir, "vendor");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// File name suffix that marks a file as a test file.
    pub test_suffix: String,

    /// Name of the dependency-vendoring directory, skipped with its contents.
    pub vendor_dir: String,

    /// Name prefix that marks an entry as hidden.
    pub hidden_prefix: String,

    /// Whether to follow symbolic links when classifying entries.
    pub follow_links: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            test_suffix: "_test.go".to_owned(),
            vendor_dir: "vendor".to_owned(),
            hidden_prefix: ".".to_owned(),
            follow_links: false,
        }
    }
}

impl ScanConfig {
    /// Returns `true` if `name` matches the test-file naming convention.
    #[must_use]
    pub fn is_test_file_name(&self, name: &str) -> bool {
        name.ends_with(self.test_suffix.as_str())
    }

    /// Returns `true` if `name` is hidden.
    #[must_use]
    pub fn is_hidden(&self, name: &str) -> bool {
        !self.hidden_prefix.is_empty() && name.starts_with(self.hidden_prefix.as_str())
    }

    /// Returns `true` if a directory called `name` is the vendoring directory.
    #[must_use]
    pub fn is_vendor_dir(&self, name: &str) -> bool {
        name == self.vendor_dir
    }
}

/// Configuration for the external test command.
///
/// # Examples
///
/// ```
/// use tn_core::RunConfig;
///
/// let config = RunConfig::default();
/// assert_eq!(config.program, "go");
/// assert_eq!(config.file_args, vec!["test", "-v", "./"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Program to launch.
    pub program: String,

    /// Arguments used when running a whole directory.
    pub dir_args: Vec<String>,

    /// Arguments used when running a single test file from its directory.
    pub file_args: Vec<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            program: "go".to_owned(),
            dir_args: vec!["test".to_owned(), "-v".to_owned()],
            file_args: vec!["test".to_owned(), "-v".to_owned(), "./".to_owned()],
        }
    }
}

/// Configuration for the terminal user interface.
///
/// # Examples
///
/// ```
/// use tn_core::{TuiConfig, ColorScheme};
///
/// let config = TuiConfig::default();
/// assert_eq!(config.tick_rate_ms, 250);
/// assert_eq!(config.color_scheme, ColorScheme::Auto);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Interval between tick events in milliseconds.
    ///
    /// Ticks drive the loading spinner.
    pub tick_rate_ms: u64,

    /// Frames rendered per second.
    pub frame_rate: u32,

    /// Color scheme for the interface.
    pub color_scheme: ColorScheme,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            frame_rate: 30,
            color_scheme: ColorScheme::Auto,
        }
    }
}

/// Root configuration for testnav.
///
/// # Examples
///
/// ```
/// use tn_core::Config;
///
/// let config = Config::default();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Discovery configuration.
    pub scan: ScanConfig,

    /// Test command configuration.
    pub run: RunConfig,

    /// Terminal UI configuration.
    pub tui: TuiConfig,
}

impl Config {
    /// Loads a configuration from a JSON file.
    ///
    /// Missing fields fall back to their defaults. The loaded configuration
    /// is validated before it is returned.
    pub fn from_file(path: &Utf8Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_std_path())?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks option values that would make the browser unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scan.test_suffix.is_empty() {
            return Err(ConfigError::invalid_option(
                "scan.test_suffix",
                "must not be empty",
            ));
        }
        if self.run.program.trim().is_empty() {
            return Err(ConfigError::invalid_option("run.program", "must not be empty"));
        }
        if self.tui.tick_rate_ms == 0 {
            return Err(ConfigError::invalid_option(
                "tui.tick_rate_ms",
                "must be positive",
            ));
        }
        if self.tui.frame_rate == 0 {
            return Err(ConfigError::invalid_option("tui.frame_rate", "must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_scan_config_defaults() {
        let config = ScanConfig::default();
        assert_eq!(config.test_suffix, "_test.go");
        assert_eq!(config.vendor_dir, "vendor");
        assert_eq!(config.hidden_prefix, ".");
        assert!(!config.follow_links);
    }

    #[test]
    fn test_scan_config_name_predicates() {
        let config = ScanConfig::default();
        assert!(config.is_test_file_name("foo_test.go"));
        assert!(!config.is_test_file_name("foo.go"));
        assert!(!config.is_test_file_name("foo_test.go.bak"));
        assert!(config.is_hidden(".git"));
        assert!(!config.is_hidden("pkg"));
        assert!(config.is_vendor_dir("vendor"));
        assert!(!config.is_vendor_dir("vendored"));
    }

    #[test]
    fn test_empty_hidden_prefix_hides_nothing() {
        let config = ScanConfig {
            hidden_prefix: String::new(),
            ..ScanConfig::default()
        };
        assert!(!config.is_hidden(".git"));
    }

    #[test]
    fn test_run_config_defaults() {
        let config = RunConfig::default();
        assert_eq!(config.program, "go");
        assert_eq!(config.dir_args, vec!["test", "-v"]);
        assert_eq!(config.file_args, vec!["test", "-v", "./"]);
    }

    #[test]
    fn test_tui_config_defaults() {
        let config = TuiConfig::default();
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.frame_rate, 30);
        assert_eq!(config.color_scheme, ColorScheme::Auto);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_config_deserialize_with_missing_fields() {
        let json = r#"{"scan": {"test_suffix": "_spec.rb"}, "tui": {"color_scheme": "light"}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.scan.test_suffix, "_spec.rb");
        assert_eq!(config.scan.vendor_dir, "vendor");
        assert_eq!(config.run.program, "go");
        assert_eq!(config.tui.color_scheme, ColorScheme::Light);
    }

    #[test]
    fn test_validate_rejects_empty_program() {
        let mut config = Config::default();
        config.run.program = "  ".to_owned();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("run.program"));
    }

    #[test]
    fn test_validate_rejects_zero_rates() {
        let mut config = Config::default();
        config.tui.tick_rate_ms = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.tui.frame_rate = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"run": {{"program": "gotestsum"}}}}"#).unwrap();
        let path = Utf8Path::from_path(file.path()).unwrap();

        let config = Config::from_file(path).unwrap();
        assert_eq!(config.run.program, "gotestsum");
        assert_eq!(config.run.dir_args, vec!["test", "-v"]);
    }

    #[test]
    fn test_from_file_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let path = Utf8Path::from_path(file.path()).unwrap();

        let err = Config::from_file(path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Config::from_file(Utf8Path::new("/nonexistent/testnav.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_color_scheme_serialization() {
        assert_eq!(
            serde_json::to_string(&ColorScheme::Auto).unwrap(),
            r#""auto""#
        );
        assert_eq!(
            serde_json::to_string(&ColorScheme::Dark).unwrap(),
            r#""dark""#
        );
        assert_eq!(
            serde_json::to_string(&ColorScheme::Light).unwrap(),
            r#""light""#
        );
        assert_eq!(
            serde_json::from_str::<ColorScheme>(r#""monochrome""#).unwrap(),
            ColorScheme::Monochrome
        );
    }
}
