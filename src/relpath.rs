//! Relative path computation between directories
//!
//! Implements the component-wise algorithm: normalize both paths into
//! segments, strip the common prefix, emit a parent marker per remaining
//! base segment, then append the remaining target segments. Working on
//! `Path::components` instead of splitting strings sidesteps separator,
//! trailing-slash and drive-prefix pitfalls.

use std::path::{Component, Path, PathBuf};

/// Compute the path of `target` relative to `base`.
///
/// Both inputs are treated as directories. Trailing separators, repeated
/// separators and `.` segments are normalized away before comparison.
///
/// # Arguments
///
/// * `base` - The directory to navigate from
/// * `target` - The directory to navigate to
///
/// # Returns
///
/// * Identical paths yield an empty `PathBuf`.
/// * A target nested under `base` yields the nested segment chain.
/// * Sibling or ancestor targets yield `..` markers followed by the
///   remaining target segments.
/// * Paths with no common root (different Windows drive prefixes, or an
///   absolute base with a relative target) yield `target` unchanged, so
///   `base.join(relative_path(base, target))` always denotes `target`.
///
/// On Windows, components are compared ASCII-case-insensitively to match
/// the filesystem's semantics.
///
/// # Example
///
/// ```ignore
/// let rel = relative_path(Path::new("/srv/files"), Path::new("/srv/files/a/b"));
/// assert_eq!(rel, PathBuf::from("a/b"));
/// ```
#[must_use]
pub fn relative_path(base: &Path, target: &Path) -> PathBuf {
    let base_parts = normalized_components(base);
    let target_parts = normalized_components(target);

    // No shared root means relativization is impossible; hand back the
    // target so joining it onto the base still denotes the right place.
    if let (Some(b), Some(t)) = (base_parts.first(), target_parts.first())
        && !components_equal(b, t)
    {
        return target.to_path_buf();
    }

    let common = base_parts
        .iter()
        .zip(target_parts.iter())
        .take_while(|&(b, t)| components_equal(b, t))
        .count();

    let mut relative = PathBuf::new();
    for _ in common..base_parts.len() {
        relative.push("..");
    }
    for component in &target_parts[common..] {
        relative.push(component.as_os_str());
    }
    relative
}

/// Break a path into components, dropping `.` segments
///
/// `Path::components` already collapses repeated and trailing separators;
/// a leading `./` survives it, so `CurDir` is filtered explicitly.
fn normalized_components(path: &Path) -> Vec<Component<'_>> {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

#[cfg(windows)]
fn components_equal(a: &Component<'_>, b: &Component<'_>) -> bool {
    a.as_os_str().eq_ignore_ascii_case(b.as_os_str())
}

#[cfg(not(windows))]
fn components_equal(a: &Component<'_>, b: &Component<'_>) -> bool {
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_paths_yield_empty() {
        let rel = relative_path(Path::new("/srv/files"), Path::new("/srv/files"));
        assert_eq!(rel, PathBuf::new());
        assert_eq!(rel.as_os_str(), "");
    }

    #[test]
    fn test_nested_target() {
        let rel = relative_path(Path::new("/srv/files"), Path::new("/srv/files/a/b/c/d"));
        assert_eq!(rel, PathBuf::from("a/b/c/d"));
    }

    #[test]
    fn test_ancestor_target() {
        let rel = relative_path(Path::new("/srv/files/a/b"), Path::new("/srv/files"));
        assert_eq!(rel, PathBuf::from("../.."));
    }

    #[test]
    fn test_sibling_target() {
        let rel = relative_path(Path::new("/srv/alpha"), Path::new("/srv/beta"));
        assert_eq!(rel, PathBuf::from("../beta"));
    }

    #[test]
    fn test_trailing_separators_ignored() {
        let rel = relative_path(Path::new("/srv/files/"), Path::new("/srv/files/a/"));
        assert_eq!(rel, PathBuf::from("a"));
    }

    #[test]
    fn test_dot_segments_normalized() {
        let rel = relative_path(Path::new("/srv/./files"), Path::new("/srv/files/./a"));
        assert_eq!(rel, PathBuf::from("a"));
    }

    #[test]
    fn test_relative_inputs() {
        let rel = relative_path(Path::new("work/data"), Path::new("work/data/in"));
        assert_eq!(rel, PathBuf::from("in"));
    }

    #[test]
    fn test_no_common_root_returns_target() {
        // Absolute base, relative target: nothing shared
        let rel = relative_path(Path::new("/srv/files"), Path::new("other/place"));
        assert_eq!(rel, PathBuf::from("other/place"));
    }

    #[test]
    fn test_round_trip_denotes_target() {
        let base = Path::new("/srv/files/a/b");
        let target = Path::new("/srv/files/c");
        let joined = base.join(relative_path(base, target));

        // Joining may produce "..", so compare after normalizing both sides
        let mut resolved = PathBuf::new();
        for component in joined.components() {
            match component {
                Component::ParentDir => {
                    resolved.pop();
                }
                Component::CurDir => {}
                other => resolved.push(other.as_os_str()),
            }
        }
        assert_eq!(resolved, target.to_path_buf());
    }

    #[cfg(windows)]
    #[test]
    fn test_windows_drive_paths() {
        let rel = relative_path(Path::new(r"C:\test"), Path::new(r"C:\test\a\b\c\d"));
        assert_eq!(rel, PathBuf::from(r"a\b\c\d"));
    }

    #[cfg(windows)]
    #[test]
    fn test_windows_case_insensitive() {
        let rel = relative_path(Path::new(r"C:\Test"), Path::new(r"c:\test\a"));
        assert_eq!(rel, PathBuf::from("a"));
    }

    #[cfg(windows)]
    #[test]
    fn test_windows_different_drives_returns_target() {
        let rel = relative_path(Path::new(r"C:\data"), Path::new(r"D:\other"));
        assert_eq!(rel, PathBuf::from(r"D:\other"));
    }
}
