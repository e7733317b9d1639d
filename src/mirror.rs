//! Directory mirroring for transfer jobs
//!
//! Walks a source directory tree and registers every qualifying file with
//! a transfer job so the destination mirrors the source's relative
//! structure. Only directories are created here; file contents move when
//! the service behind the job gets to them.

use std::path::Path;

use crate::error::{FilterError, MirrorError};
use crate::fsys::Filesystem;
use crate::job::{TransferJob, TransferPair};
use crate::relpath::relative_path;

/// Predicate deciding whether a discovered file is registered
///
/// Receives the absolute source path. Returning `Ok(false)` skips the
/// file; an error aborts the pass and is propagated unchanged inside
/// [`MirrorError::Filter`].
pub type FileFilter<'a> = &'a dyn Fn(&Path) -> Result<bool, FilterError>;

/// Parameters for a mirror pass
pub struct MirrorRequest<'a> {
    /// Directory tree to replicate; must exist and be a directory
    pub source_root: &'a Path,
    /// Root the relative structure is recreated under; created if absent
    pub destination_root: &'a Path,
    /// Optional filter over absolute source paths; `None` registers everything
    pub filter: Option<FileFilter<'a>>,
    /// Log each registered pair to stderr
    pub debug: bool,
}

impl<'a> MirrorRequest<'a> {
    /// Request with no filter and debug logging off
    #[must_use]
    pub fn new(source_root: &'a Path, destination_root: &'a Path) -> Self {
        Self {
            source_root,
            destination_root,
            filter: None,
            debug: false,
        }
    }
}

/// Mirror `source_root`'s file tree under `destination_root`, registering
/// each file with `job`.
///
/// Enumerates all regular files under `request.source_root` recursively,
/// in lexicographic order. For each file that passes the filter, the
/// destination path preserving the file's relative location is computed,
/// its parent directory is created if missing, and the pair is handed to
/// `job`. The job can therefore assume every destination's directory
/// exists by the time it sees the pair.
///
/// Returns the number of pairs registered.
///
/// # Errors
///
/// * [`MirrorError::InvalidSource`] - `source_root` missing or not a
///   directory. Raised before any side effects.
/// * [`MirrorError::Filesystem`] - a directory could not be created, or
///   enumeration failed. Aborts the remaining pass; directories already
///   created stay (no rollback), as do pairs already registered.
/// * [`MirrorError::Filter`] - the filter returned an error. Aborts the
///   pass at that file, propagating the inner error unchanged.
///
/// # Example
///
/// ```ignore
/// let mut job = PendingJob::new();
/// let request = MirrorRequest::new(Path::new("/srv/share"), Path::new("/home/drop"));
/// let count = mirror(&StdFilesystem, &request, &mut job)?;
/// ```
pub fn mirror<FS: Filesystem>(
    fs: &FS,
    request: &MirrorRequest<'_>,
    job: &mut dyn TransferJob,
) -> Result<usize, MirrorError> {
    if !fs.is_dir(request.source_root) {
        return Err(MirrorError::InvalidSource(request.source_root.to_path_buf()));
    }

    if !fs.is_dir(request.destination_root) {
        fs.create_dir_all(request.destination_root)
            .map_err(|source| MirrorError::Filesystem {
                path: request.destination_root.to_path_buf(),
                source,
            })?;
    }

    let files =
        fs.files_under(request.source_root)
            .map_err(|source| MirrorError::Filesystem {
                path: request.source_root.to_path_buf(),
                source,
            })?;

    let mut registered = 0;
    for file in files {
        if let Some(filter) = request.filter {
            match filter(&file) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(source) => return Err(MirrorError::Filter { path: file, source }),
            }
        }

        let relative = relative_path(request.source_root, &file);
        let destination = request.destination_root.join(relative);

        if let Some(parent) = destination.parent()
            && !fs.is_dir(parent)
        {
            fs.create_dir_all(parent)
                .map_err(|source| MirrorError::Filesystem {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        if request.debug {
            eprintln!("Queueing {} -> {}", file.display(), destination.display());
        }

        job.add_file(TransferPair {
            source: file,
            destination,
        });
        registered += 1;
    }

    Ok(registered)
}
