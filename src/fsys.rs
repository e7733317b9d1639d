//! Filesystem access for mirror passes
//!
//! Everything the mirror operation needs from the filesystem goes through
//! the [`Filesystem`] trait, so tests can substitute failing or synthetic
//! implementations instead of touching real disk. [`StdFilesystem`] is the
//! production implementation: `std::fs` plus a sorted `walkdir` walk.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Filesystem primitives used by a mirror pass
pub trait Filesystem {
    /// Whether `path` exists and is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Create `path` and any missing ancestors
    ///
    /// Must be idempotent: creating an existing directory is not an error.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Enumerate all regular files under `root`, recursively
    ///
    /// Returns absolute paths when `root` is absolute. The order must be
    /// deterministic per run; [`StdFilesystem`] sorts lexicographically by
    /// file name at each level.
    ///
    /// # Errors
    ///
    /// Any entry that cannot be read fails the whole enumeration. A mirror
    /// pass must not silently drop files.
    fn files_under(&self, root: &Path) -> io::Result<Vec<PathBuf>>;
}

/// Real filesystem implementation over `std::fs` and `walkdir`
///
/// Symlinked directories are not descended into and symlinked files are
/// not reported; only regular files are enumerated.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFilesystem;

impl Filesystem for StdFilesystem {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn files_under(&self, root: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .min_depth(1) // Skip the root itself
            .sort_by_file_name()
        {
            let entry = entry?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}
