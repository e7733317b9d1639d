//! Shared constants for mirror operations
//!
//! Machine-readable error kinds are stable strings suitable for logs and
//! for callers that dispatch on failure class without matching the enum.

/// Machine-readable kind: source root missing or not a directory
pub const ERROR_KIND_INVALID_SOURCE: &str = "invalid_source";

/// Machine-readable kind: directory creation or enumeration failure
pub const ERROR_KIND_IO_ERROR: &str = "io_error";

/// Machine-readable kind: caller-supplied filter failed
pub const ERROR_KIND_FILTER: &str = "filter";

/// Error message prefix for source root precondition failures
pub const ERR_SOURCE_NOT_DIR: &str = "Source root must be an existing directory: ";

/// Error message prefix for directory creation/enumeration failures
pub const ERR_FILESYSTEM: &str = "Filesystem operation failed for ";

/// Error message prefix for filter failures
pub const ERR_FILTER: &str = "File filter failed for ";
