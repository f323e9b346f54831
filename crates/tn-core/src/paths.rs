//! Navigation helpers bounded by the session root.
//!
//! The session root is the directory the browser was started in. Parent
//! navigation never leaves it: once a parent would resolve to `.`, to an
//! empty path, to the filesystem root, or to anything outside the session
//! root, it resolves to the session root instead.

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::ConfigError;

/// Display name of the synthetic "go up" entry.
pub const PARENT_MARKER: &str = "..";

/// Checks that `root` can serve as a session root.
///
/// # Errors
///
/// Returns [`ConfigError::MissingRoot`] if nothing exists at `root` and
/// [`ConfigError::RootNotDirectory`] if it is not a directory.
pub fn check_root(root: &Utf8Path) -> Result<(), ConfigError> {
    if !root.exists() {
        return Err(ConfigError::MissingRoot(root.to_owned()));
    }
    if !root.is_dir() {
        return Err(ConfigError::RootNotDirectory(root.to_owned()));
    }
    Ok(())
}

/// Returns `true` if `dir` is the session root.
#[must_use]
pub fn is_session_root(dir: &Utf8Path, root: &Utf8Path) -> bool {
    dir == root
}

/// Returns the directory one level above `dir`, clamped to `root`.
///
/// Returns `None` when `dir` already is the session root.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use tn_core::parent_within;
///
/// let root = Utf8Path::new("proj");
/// assert_eq!(parent_within(Utf8Path::new("proj/a/b"), root).unwrap(), "proj/a");
/// assert_eq!(parent_within(Utf8Path::new("proj/a"), root).unwrap(), "proj");
/// assert!(parent_within(root, root).is_none());
/// ```
#[must_use]
pub fn parent_within(dir: &Utf8Path, root: &Utf8Path) -> Option<Utf8PathBuf> {
    if is_session_root(dir, root) {
        return None;
    }

    let parent = match dir.parent() {
        Some(parent) if !parent.as_str().is_empty() && parent != "." => parent,
        _ => return Some(root.to_owned()),
    };

    // `/` has no parent of its own
    if parent.parent().is_none() || !parent.starts_with(root) {
        return Some(root.to_owned());
    }

    Some(parent.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_root() {
        let temp = tempfile::TempDir::new().unwrap();
        let dir = Utf8Path::from_path(temp.path()).unwrap();
        let file = dir.join("calc_test.go");
        std::fs::write(&file, "package calc\n").unwrap();

        assert!(check_root(dir).is_ok());
        assert!(matches!(
            check_root(&dir.join("missing")),
            Err(ConfigError::MissingRoot(_))
        ));
        assert!(matches!(
            check_root(&file),
            Err(ConfigError::RootNotDirectory(_))
        ));
    }

    #[test]
    fn test_root_has_no_parent() {
        assert!(parent_within(Utf8Path::new("."), Utf8Path::new(".")).is_none());
        assert!(parent_within(Utf8Path::new("/srv/proj"), Utf8Path::new("/srv/proj")).is_none());
    }

    #[test]
    fn test_root_comparison_ignores_trailing_separator() {
        assert!(is_session_root(Utf8Path::new("proj/"), Utf8Path::new("proj")));
    }

    #[test]
    fn test_two_levels_below_root_goes_to_intermediate() {
        let root = Utf8Path::new("/srv/proj");
        let parent = parent_within(Utf8Path::new("/srv/proj/pkg/inner"), root);
        assert_eq!(parent.as_deref(), Some(Utf8Path::new("/srv/proj/pkg")));
    }

    #[test]
    fn test_one_level_below_dot_root() {
        let root = Utf8Path::new(".");
        assert_eq!(
            parent_within(Utf8Path::new("./pkg"), root).as_deref(),
            Some(Utf8Path::new("."))
        );
        assert_eq!(
            parent_within(Utf8Path::new("pkg"), root).as_deref(),
            Some(Utf8Path::new("."))
        );
    }

    #[test]
    fn test_nested_below_dot_root() {
        let root = Utf8Path::new(".");
        assert_eq!(
            parent_within(Utf8Path::new("./pkg/inner"), root).as_deref(),
            Some(Utf8Path::new("./pkg"))
        );
    }

    #[test]
    fn test_parent_outside_root_clamps() {
        let root = Utf8Path::new("/srv/proj");
        assert_eq!(
            parent_within(Utf8Path::new("/elsewhere/pkg"), root).as_deref(),
            Some(root)
        );
    }

    #[test]
    fn test_filesystem_root_parent_clamps() {
        let root = Utf8Path::new("proj");
        assert_eq!(parent_within(Utf8Path::new("/tmp"), root).as_deref(), Some(root));
    }
}
