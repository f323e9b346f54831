//! Runs the configured test command against one entry.

use std::io::{self, Read};
use std::process::{Command, ExitStatus};

use camino::Utf8Path;
use tn_core::{ExecutionResult, RunConfig};
use tracing::{debug, info};

use crate::command::{command, RunTarget};
use crate::error::RunError;

/// Launches the external test command and captures its outcome.
///
/// An invoker is a thin, cloneable wrapper around a [`RunConfig`]. It holds
/// no process state between runs; every call to [`Invoker::run`] spawns a
/// fresh child and blocks until it exits.
#[derive(Debug, Clone, Default)]
pub struct Invoker {
    config: RunConfig,
}

impl Invoker {
    /// Creates an invoker that launches `config.program`.
    #[must_use]
    pub const fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Runs the tests for `path` and waits for the command to finish.
    ///
    /// A directory is run with the directory arguments from inside that
    /// directory. Anything else is treated as a test file and runs the file
    /// arguments from the file's containing directory, which executes every
    /// test in that package.
    ///
    /// Standard output and standard error share one pipe, so the captured
    /// text keeps the order in which the command wrote it.
    ///
    /// This never fails: launch errors and non-zero exits are both reported
    /// through [`ExecutionResult::failure`].
    #[must_use]
    pub fn run(&self, path: &Utf8Path) -> ExecutionResult {
        let target = RunTarget::resolve(path);
        let args = if target.is_file() {
            &self.config.file_args
        } else {
            &self.config.dir_args
        };

        info!(
            path = %path,
            working_dir = %target.working_dir(),
            program = %self.config.program,
            "Running tests"
        );

        let mut cmd = command(&self.config.program, target.working_dir());
        cmd.args(args);

        match capture(cmd, &self.config.program) {
            Ok((status, output)) => Self::settle(path, status, output),
            Err(err) => {
                // Surfaced through the result view.
                debug!(path = %path, error = %err, "Test command did not complete");
                ExecutionResult::failure(path, String::new(), err.to_string())
            }
        }
    }

    fn settle(path: &Utf8Path, status: ExitStatus, output: String) -> ExecutionResult {
        debug!(
            path = %path,
            status = %status,
            bytes = output.len(),
            "Test command finished"
        );

        if status.success() {
            ExecutionResult::success(path, output)
        } else {
            ExecutionResult::failure(path, output, RunError::Exit(status).to_string())
        }
    }
}

/// Runs `cmd` to completion with standard output and standard error
/// writing into the same pipe.
fn capture(mut cmd: Command, program: &str) -> Result<(ExitStatus, String), RunError> {
    let (mut reader, writer) = io::pipe().map_err(|e| RunError::launch(program, e))?;
    let stderr = writer.try_clone().map_err(|e| RunError::launch(program, e))?;
    cmd.stdout(writer).stderr(stderr);

    let mut child = cmd.spawn().map_err(|e| RunError::launch(program, e))?;
    // The command keeps its copies of the write end; EOF only arrives once
    // they are closed.
    drop(cmd);

    let mut bytes = Vec::new();
    let read = reader.read_to_end(&mut bytes);
    let status = child.wait().map_err(RunError::Capture)?;
    read.map_err(RunError::Capture)?;

    Ok((status, String::from_utf8_lossy(&bytes).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_launch_failure() {
        let invoker = Invoker::new(RunConfig {
            program: "testnav-definitely-not-a-real-program".to_owned(),
            ..RunConfig::default()
        });

        let result = invoker.run(Utf8Path::new("."));

        assert!(!result.succeeded());
        assert!(result.output().is_empty());
        assert!(result.error_text().starts_with("failed to launch"));
        assert_eq!(result.path(), ".");
    }

    #[cfg(unix)]
    mod unix {
        use super::*;
        use std::fs;
        use tempfile::TempDir;

        fn shell(script: &str) -> Invoker {
            let args = vec!["-c".to_owned(), script.to_owned()];
            Invoker::new(RunConfig {
                program: "sh".to_owned(),
                dir_args: args.clone(),
                file_args: args,
            })
        }

        fn temp_dir() -> (TempDir, camino::Utf8PathBuf) {
            let temp = TempDir::new().expect("temp dir");
            let dir = Utf8Path::from_path(temp.path())
                .expect("temp dir is UTF-8")
                .to_owned();
            (temp, dir)
        }

        #[test]
        fn test_passing_run() {
            let (_temp, dir) = temp_dir();

            let result = shell("printf PASS").run(&dir);

            assert!(result.succeeded());
            assert_eq!(result.output(), "PASS");
            assert_eq!(result.error_text(), "");
            assert_eq!(result.path(), dir);
        }

        #[test]
        fn test_failing_run_keeps_output() {
            let (_temp, dir) = temp_dir();

            let result = shell("echo boom; exit 1").run(&dir);

            assert!(!result.succeeded());
            assert_eq!(result.output(), "boom\n");
            assert!(result.error_text().contains("exit status"));
        }

        #[test]
        fn test_output_keeps_write_order_across_streams() {
            let (_temp, dir) = temp_dir();

            let result = shell("echo a; echo b 1>&2; echo c").run(&dir);

            assert!(result.succeeded());
            assert_eq!(result.output(), "a\nb\nc\n");
        }

        #[test]
        fn test_invalid_utf8_output_is_replaced() {
            let (_temp, dir) = temp_dir();

            let result = shell("printf 'f\\377'").run(&dir);

            assert_eq!(result.output(), "f\u{fffd}");
        }

        #[test]
        fn test_stderr_is_captured() {
            let (_temp, dir) = temp_dir();

            let result = shell("echo out; echo err 1>&2").run(&dir);

            assert!(result.succeeded());
            assert_eq!(result.output(), "out\nerr\n");
        }

        #[test]
        fn test_directory_runs_inside_directory() {
            let (_temp, dir) = temp_dir();
            fs::create_dir(dir.join("pkg")).expect("mkdir");
            fs::write(dir.join("pkg").join("marker.txt"), "").expect("write");

            let result = shell("ls").run(&dir.join("pkg"));

            assert!(result.output().contains("marker.txt"));
        }

        #[test]
        fn test_file_runs_from_containing_directory() {
            let (_temp, dir) = temp_dir();
            let file = dir.join("foo_test.go");
            fs::write(&file, "package foo\n").expect("write");

            let result = shell("ls").run(&file);

            assert!(result.succeeded());
            assert!(result.output().contains("foo_test.go"));
            assert_eq!(result.path(), file);
        }

        #[test]
        fn test_file_and_directory_use_their_own_arguments() {
            let (_temp, dir) = temp_dir();
            let file = dir.join("foo_test.go");
            fs::write(&file, "package foo\n").expect("write");
            let invoker = Invoker::new(RunConfig {
                program: "sh".to_owned(),
                dir_args: vec!["-c".to_owned(), "printf dir".to_owned()],
                file_args: vec!["-c".to_owned(), "printf file".to_owned()],
            });

            assert_eq!(invoker.run(&dir).output(), "dir");
            assert_eq!(invoker.run(&file).output(), "file");
        }

        #[test]
        fn test_child_does_not_read_terminal() {
            let (_temp, dir) = temp_dir();

            let result = shell("cat").run(&dir);

            assert!(result.succeeded());
            assert_eq!(result.output(), "");
        }
    }
}
