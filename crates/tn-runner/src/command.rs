//! Target resolution and command construction.

use std::process::{Command, Stdio};

use camino::{Utf8Path, Utf8PathBuf};

/// What a run is scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunTarget {
    /// A single test file, run from its containing directory.
    File {
        /// The test file.
        file: Utf8PathBuf,
        /// The file's containing directory.
        working_dir: Utf8PathBuf,
    },
    /// A whole directory.
    Directory(Utf8PathBuf),
}

impl RunTarget {
    /// Resolves `path` to a run target.
    ///
    /// Anything that is not an existing directory is treated as a file.
    #[must_use]
    pub fn resolve(path: &Utf8Path) -> Self {
        if path.is_dir() {
            return Self::Directory(path.to_owned());
        }

        let working_dir = match path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent.to_owned(),
            _ => Utf8PathBuf::from("."),
        };
        Self::File {
            file: path.to_owned(),
            working_dir,
        }
    }

    /// The directory the test command runs in.
    #[must_use]
    pub fn working_dir(&self) -> &Utf8Path {
        match self {
            Self::File { working_dir, .. } => working_dir,
            Self::Directory(dir) => dir,
        }
    }

    /// Returns `true` for single-file targets.
    #[must_use]
    pub const fn is_file(&self) -> bool {
        matches!(self, Self::File { .. })
    }
}

/// Creates a command that is rooted to a specific working directory.
///
/// Standard input is closed so the child never competes with the terminal
/// for key presses.
#[allow(clippy::disallowed_methods)]
pub(crate) fn command(program: &str, working_dir: &Utf8Path) -> Command {
    let mut cmd = Command::new(program);
    cmd.current_dir(working_dir.as_std_path())
        .stdin(Stdio::null());
    cmd
}
