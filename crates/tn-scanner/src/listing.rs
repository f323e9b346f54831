//! Single-level directory enumeration.
//!
//! The scanner never walks recursively. It lists one directory with
//! [`read_children`] and, for each directory child, looks exactly one level
//! deeper with [`contains_test_file`]. Keeping the two levels as separate
//! functions makes the depth limit a property of the code shape.

use std::fs;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use tn_core::ScanConfig;

use crate::error::ScanError;

/// One immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Child {
    /// Basename of the child.
    pub name: String,
    /// Full path (`dir` joined with `name`).
    pub path: Utf8PathBuf,
    /// Whether the child is a directory.
    pub is_dir: bool,
}

/// Lists the immediate children of `dir`, sorted by name.
pub(crate) fn read_children(dir: &Utf8Path, follow_links: bool) -> Result<Vec<Child>, ScanError> {
    let read_dir = fs::read_dir(dir.as_std_path()).map_err(|e| ScanError::read_dir(dir, e))?;

    let mut children = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| ScanError::read_dir(dir, e))?;
        let name = entry
            .file_name()
            .into_string()
            .map_err(|_| ScanError::NonUtf8Path(entry.path()))?;
        let is_dir = resolve_is_dir(&entry, follow_links).map_err(|e| ScanError::read_dir(dir, e))?;

        children.push(Child {
            path: dir.join(&name),
            name,
            is_dir,
        });
    }

    children.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(children)
}

/// Returns `true` if `dir` directly contains a visible test file.
///
/// Names that are not valid UTF-8 cannot match the naming convention and
/// are ignored here rather than failing the scan.
pub(crate) fn contains_test_file(dir: &Utf8Path, config: &ScanConfig) -> Result<bool, ScanError> {
    let read_dir = fs::read_dir(dir.as_std_path()).map_err(|e| ScanError::read_dir(dir, e))?;

    for entry in read_dir {
        let entry = entry.map_err(|e| ScanError::read_dir(dir, e))?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };

        if config.is_hidden(name) || !config.is_test_file_name(name) {
            continue;
        }

        let is_dir =
            resolve_is_dir(&entry, config.follow_links).map_err(|e| ScanError::read_dir(dir, e))?;
        if !is_dir {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Decides whether a directory entry counts as a directory.
///
/// Symbolic links are classified by the link itself unless `follow_links`
/// is set; a dangling link is never a directory.
fn resolve_is_dir(entry: &fs::DirEntry, follow_links: bool) -> io::Result<bool> {
    let file_type = entry.file_type()?;
    if file_type.is_symlink() && follow_links {
        return Ok(fs::metadata(entry.path()).is_ok_and(|meta| meta.is_dir()));
    }
    Ok(file_type.is_dir())
}
