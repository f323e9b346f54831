//! Outcome of one external test run.

use camino::{Utf8Path, Utf8PathBuf};

/// Outcome of one invoked test run.
///
/// The error text is non-empty exactly when the run did not succeed; the
/// constructors are the only way to build a result, so that invariant
/// holds for every value.
///
/// # Examples
///
/// ```
/// use tn_core::ExecutionResult;
///
/// let ok = ExecutionResult::success("pkg/foo_test.go", "PASS");
/// assert!(ok.succeeded());
/// assert!(ok.error_text().is_empty());
///
/// let failed = ExecutionResult::failure("pkg", "FAIL\n", "exit status: 1");
/// assert!(!failed.succeeded());
/// assert_eq!(failed.error_text(), "exit status: 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    path: Utf8PathBuf,
    succeeded: bool,
    output: String,
    error_text: String,
}

impl ExecutionResult {
    /// Creates a successful result with the captured output.
    #[must_use]
    pub fn success(path: impl Into<Utf8PathBuf>, output: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            succeeded: true,
            output: output.into(),
            error_text: String::new(),
        }
    }

    /// Creates a failed result.
    ///
    /// An empty `error_text` is replaced with a generic description.
    #[must_use]
    pub fn failure(
        path: impl Into<Utf8PathBuf>,
        output: impl Into<String>,
        error_text: impl Into<String>,
    ) -> Self {
        let mut error_text = error_text.into();
        if error_text.is_empty() {
            error_text.push_str("test run failed");
        }
        Self {
            path: path.into(),
            succeeded: false,
            output: output.into(),
            error_text,
        }
    }

    /// The path of the entry that was run.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Whether the external process exited with status zero.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.succeeded
    }

    /// Combined standard output and standard error.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Failure description; empty for successful runs.
    #[must_use]
    pub fn error_text(&self) -> &str {
        &self.error_text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_has_no_error_text() {
        let result = ExecutionResult::success("calc/calculator_test.go", "PASS");
        assert!(result.succeeded());
        assert_eq!(result.output(), "PASS");
        assert_eq!(result.error_text(), "");
        assert_eq!(result.path(), "calc/calculator_test.go");
    }

    #[test]
    fn test_failure_keeps_output() {
        let result = ExecutionResult::failure("calc", "--- FAIL: TestAdd", "exit status: 1");
        assert!(!result.succeeded());
        assert_eq!(result.output(), "--- FAIL: TestAdd");
        assert_eq!(result.error_text(), "exit status: 1");
    }

    #[test]
    fn test_failure_error_text_never_empty() {
        let result = ExecutionResult::failure("calc", "", "");
        assert!(!result.error_text().is_empty());
    }
}
