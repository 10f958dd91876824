//! Error types for filesystem operations and path validation.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of a failed filesystem operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FsErrorKind {
    PermissionDenied,
    NotFound,
    StorageFull,
    NameTooLong,
    /// The file is locked or in use by another process.
    InUse,
    /// Special files (pipes, devices, ...) the operation cannot handle.
    UnsupportedType,
    TimedOut,
    Other,
}

/// A failed copy, move, delete or listing.
///
/// Displays as the bare message so callers can prefix it with the
/// operation label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FsError {
    pub kind: FsErrorKind,
    pub message: String,
}

impl FsError {
    pub fn new(kind: FsErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Map an I/O error onto a kind, keeping the OS message.
    pub fn io(source: std::io::Error) -> Self {
        use std::io::ErrorKind;

        let kind = match source.kind() {
            ErrorKind::PermissionDenied | ErrorKind::ReadOnlyFilesystem => {
                FsErrorKind::PermissionDenied
            }
            ErrorKind::NotFound => FsErrorKind::NotFound,
            ErrorKind::StorageFull => FsErrorKind::StorageFull,
            ErrorKind::InvalidFilename => FsErrorKind::NameTooLong,
            ErrorKind::ResourceBusy => FsErrorKind::InUse,
            ErrorKind::Unsupported => FsErrorKind::UnsupportedType,
            ErrorKind::TimedOut => FsErrorKind::TimedOut,
            _ => FsErrorKind::Other,
        };
        Self::new(kind, source.to_string())
    }

    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::new(
            FsErrorKind::NotFound,
            format!("No such file or directory: {}", path.display()),
        )
    }

    pub fn unsupported_type(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::new(
            FsErrorKind::UnsupportedType,
            format!("Unsupported file type: {}", path.display()),
        )
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(FsErrorKind::Other, message)
    }
}

impl From<std::io::Error> for FsError {
    fn from(source: std::io::Error) -> Self {
        Self::io(source)
    }
}

/// A path rejected before any filesystem operation was attempted.
#[derive(Debug, Error)]
pub enum PathError {
    /// Normalized path is longer than the configured limit.
    #[error("Path too long ({len} > {max} characters)")]
    TooLong { len: usize, max: usize },

    /// Path cannot be addressed at all (empty, embedded NUL, ...).
    #[error("Malformed path: {reason}")]
    Malformed { reason: String },

    /// Resolution failed, e.g. a symlink loop.
    #[error("Cannot resolve {path}: {source}")]
    Unresolvable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PathError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fs_error_io() {
        let err = FsError::io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "Read-only file",
        ));
        assert_eq!(err.kind, FsErrorKind::PermissionDenied);
        assert_eq!(err.to_string(), "Read-only file");

        let err = FsError::from(std::io::Error::new(std::io::ErrorKind::TimedOut, "Network timeout"));
        assert_eq!(err.kind, FsErrorKind::TimedOut);
    }

    #[test]
    fn test_fs_error_display_is_bare_message() {
        let err = FsError::new(FsErrorKind::StorageFull, "Disk full");
        assert_eq!(format!("Copy: {err}"), "Copy: Disk full");
    }

    #[test]
    fn test_path_error_messages() {
        let err = PathError::TooLong { len: 304, max: 255 };
        assert!(err.to_string().to_lowercase().contains("too long"));

        let err = PathError::malformed("empty path");
        assert_eq!(err.to_string(), "Malformed path: empty path");
    }
}
