//! Listing entries produced by a directory scan.

use camino::{Utf8Path, Utf8PathBuf};

use crate::paths::PARENT_MARKER;

/// Presentation category of an [`Entry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// The synthetic link to the parent directory.
    Parent,
    /// A directory without test files at its top level.
    Directory,
    /// A directory with at least one test file at its top level.
    TestDirectory,
    /// A test file.
    TestFile,
    /// A file that is not a test file.
    Plain,
}

/// One classified filesystem item surfaced to the user.
///
/// Entries are created fresh on every scan and never mutated; a listing is
/// replaced wholesale when the next scan completes.
///
/// # Examples
///
/// ```
/// use tn_core::{Entry, EntryKind};
///
/// let entry = Entry::directory("pkg/calc", true);
/// assert_eq!(entry.name, "calc");
/// assert_eq!(entry.kind(), EntryKind::TestDirectory);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Path of the item, unique within one scan.
    pub path: Utf8PathBuf,

    /// Display label (basename, or `..` for the parent link).
    pub name: String,

    /// Whether the item is a directory.
    pub is_dir: bool,

    /// Whether selecting the item can trigger a test run.
    pub is_runnable: bool,
}

impl Entry {
    /// Creates a directory entry.
    #[must_use]
    pub fn directory(path: impl Into<Utf8PathBuf>, has_tests: bool) -> Self {
        let path = path.into();
        Self {
            name: display_name(&path),
            path,
            is_dir: true,
            is_runnable: has_tests,
        }
    }

    /// Creates a test file entry.
    #[must_use]
    pub fn test_file(path: impl Into<Utf8PathBuf>) -> Self {
        let path = path.into();
        Self {
            name: display_name(&path),
            path,
            is_dir: false,
            is_runnable: true,
        }
    }

    /// Creates the synthetic entry that navigates to `parent`.
    #[must_use]
    pub fn parent(parent: impl Into<Utf8PathBuf>) -> Self {
        Self {
            path: parent.into(),
            name: PARENT_MARKER.to_owned(),
            is_dir: true,
            is_runnable: false,
        }
    }

    /// Returns `true` if this is the synthetic parent link.
    #[must_use]
    pub fn is_parent_link(&self) -> bool {
        self.is_dir && self.name == PARENT_MARKER
    }

    /// Returns `true` if this entry may appear in a listing.
    #[must_use]
    pub const fn is_listable(&self) -> bool {
        self.is_dir || self.is_runnable
    }

    /// Classifies the entry for presentation.
    #[must_use]
    pub fn kind(&self) -> EntryKind {
        match (self.is_dir, self.is_runnable) {
            _ if self.is_parent_link() => EntryKind::Parent,
            (true, true) => EntryKind::TestDirectory,
            (true, false) => EntryKind::Directory,
            (false, true) => EntryKind::TestFile,
            (false, false) => EntryKind::Plain,
        }
    }
}

fn display_name(path: &Utf8Path) -> String {
    path.file_name().unwrap_or(path.as_str()).to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_entry() {
        let entry = Entry::directory("root/pkgB", false);
        assert_eq!(entry.name, "pkgB");
        assert!(entry.is_dir);
        assert!(!entry.is_runnable);
        assert!(entry.is_listable());
        assert_eq!(entry.kind(), EntryKind::Directory);
    }

    #[test]
    fn test_test_file_entry() {
        let entry = Entry::test_file("root/foo_test.go");
        assert_eq!(entry.name, "foo_test.go");
        assert_eq!(entry.path, "root/foo_test.go");
        assert_eq!(entry.kind(), EntryKind::TestFile);
    }

    #[test]
    fn test_parent_entry() {
        let entry = Entry::parent("root");
        assert_eq!(entry.name, "..");
        assert_eq!(entry.path, "root");
        assert!(entry.is_dir);
        assert!(!entry.is_runnable);
        assert!(entry.is_parent_link());
        assert_eq!(entry.kind(), EntryKind::Parent);
    }

    #[test]
    fn test_directory_named_like_marker_is_not_confused() {
        let entry = Entry::directory("root/pkg", true);
        assert!(!entry.is_parent_link());
    }

    #[test]
    fn test_plain_entry_is_not_listable() {
        let entry = Entry {
            path: Utf8PathBuf::from("root/main.go"),
            name: "main.go".to_owned(),
            is_dir: false,
            is_runnable: false,
        };
        assert!(!entry.is_listable());
        assert_eq!(entry.kind(), EntryKind::Plain);
    }
}
