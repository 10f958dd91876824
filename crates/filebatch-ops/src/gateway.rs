//! Single-item filesystem operations.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use filebatch_core::{FsError, FsErrorKind};

/// Performs one copy, move or delete.
pub trait FilesystemGateway {
    /// Copy `source` to `destination`.
    fn copy(&mut self, source: &Path, destination: &Path) -> Result<(), FsError>;

    /// Move `source` to `destination`.
    fn move_to(&mut self, source: &Path, destination: &Path) -> Result<(), FsError>;

    /// Delete `target`, recursively for directories.
    fn delete(&mut self, target: &Path) -> Result<(), FsError>;
}

impl<T: FilesystemGateway + ?Sized> FilesystemGateway for &mut T {
    fn copy(&mut self, source: &Path, destination: &Path) -> Result<(), FsError> {
        (**self).copy(source, destination)
    }

    fn move_to(&mut self, source: &Path, destination: &Path) -> Result<(), FsError> {
        (**self).move_to(source, destination)
    }

    fn delete(&mut self, target: &Path) -> Result<(), FsError> {
        (**self).delete(target)
    }
}

impl<T: FilesystemGateway + ?Sized> FilesystemGateway for Box<T> {
    fn copy(&mut self, source: &Path, destination: &Path) -> Result<(), FsError> {
        (**self).copy(source, destination)
    }

    fn move_to(&mut self, source: &Path, destination: &Path) -> Result<(), FsError> {
        (**self).move_to(source, destination)
    }

    fn delete(&mut self, target: &Path) -> Result<(), FsError> {
        (**self).delete(target)
    }
}

/// Gateway backed by `std::fs`.
///
/// When the destination is an existing directory the item is placed inside
/// it under its own file name; otherwise the destination is the new path.
#[derive(Debug, Clone, Default)]
pub struct StdFilesystem {
    /// Move deleted items to the system trash instead of removing them.
    pub use_trash: bool,
}

impl StdFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gateway that uses trash for deletions.
    pub fn with_trash() -> Self {
        Self { use_trash: true }
    }
}

impl FilesystemGateway for StdFilesystem {
    fn copy(&mut self, source: &Path, destination: &Path) -> Result<(), FsError> {
        let metadata = fs::metadata(source).map_err(|e| missing_or_io(source, e))?;
        let target = target_path(source, destination)?;

        if metadata.is_dir() {
            ensure_not_into_itself(source, &target)?;
            copy_dir_recursive(source, &target)?;
        } else if metadata.is_file() {
            fs::copy(source, &target)?;
        } else {
            return Err(FsError::unsupported_type(source));
        }

        tracing::debug!(from = %source.display(), to = %target.display(), "Copied");
        Ok(())
    }

    fn move_to(&mut self, source: &Path, destination: &Path) -> Result<(), FsError> {
        let metadata = fs::symlink_metadata(source).map_err(|e| missing_or_io(source, e))?;
        let target = target_path(source, destination)?;

        if metadata.is_dir() {
            ensure_not_into_itself(source, &target)?;
        }

        // Try rename first (fast path for same filesystem)
        if let Err(e) = fs::rename(source, &target) {
            if e.kind() != ErrorKind::CrossesDevices {
                return Err(FsError::io(e));
            }
            // Fall back to copy + delete for cross-filesystem moves
            if metadata.is_dir() {
                copy_dir_recursive(source, &target)?;
                fs::remove_dir_all(source)?;
            } else if metadata.is_file() {
                fs::copy(source, &target)?;
                fs::remove_file(source)?;
            } else {
                return Err(FsError::unsupported_type(source));
            }
        }

        tracing::debug!(from = %source.display(), to = %target.display(), "Moved");
        Ok(())
    }

    fn delete(&mut self, target: &Path) -> Result<(), FsError> {
        let metadata = fs::symlink_metadata(target).map_err(|e| missing_or_io(target, e))?;

        if self.use_trash {
            trash::delete(target).map_err(|e| FsError::other(e.to_string()))?;
        } else if metadata.is_dir() {
            fs::remove_dir_all(target)?;
        } else {
            fs::remove_file(target)?;
        }

        tracing::debug!(path = %target.display(), trash = self.use_trash, "Deleted");
        Ok(())
    }
}

/// Where `source` ends up when sent to `destination`.
fn target_path(source: &Path, destination: &Path) -> Result<PathBuf, FsError> {
    if !destination.is_dir() {
        return Ok(destination.to_path_buf());
    }
    let name = source.file_name().ok_or_else(|| {
        FsError::other(format!("Source has no file name: {}", source.display()))
    })?;
    Ok(destination.join(name))
}

fn missing_or_io(path: &Path, error: io::Error) -> FsError {
    if error.kind() == ErrorKind::NotFound {
        FsError::not_found(path)
    } else {
        FsError::io(error)
    }
}

/// Reject a target inside `source`, comparing resolved paths.
fn ensure_not_into_itself(source: &Path, target: &Path) -> Result<(), FsError> {
    let source_resolved = fs::canonicalize(source)?;
    let target_resolved = resolve_target(target)?;

    if target_resolved.starts_with(&source_resolved) {
        return Err(FsError::new(
            FsErrorKind::Other,
            format!("Cannot copy/move a directory into itself: {}", source.display()),
        ));
    }
    Ok(())
}

/// Canonical form of a path that may not exist yet.
///
/// The deepest existing ancestor is canonicalized and the missing
/// components are appended to it.
fn resolve_target(target: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(target)?;
    let mut existing = absolute.as_path();
    let mut missing = Vec::new();

    loop {
        match fs::canonicalize(existing) {
            Ok(resolved) => {
                return Ok(missing.iter().rev().fold(resolved, |path, name| path.join(name)));
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let (Some(parent), Some(name)) = (existing.parent(), existing.file_name()) else {
                    return Err(e);
                };
                missing.push(name);
                existing = parent;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Recursively copy a directory.
fn copy_dir_recursive(source: &Path, dest: &Path) -> Result<(), FsError> {
    fs::create_dir_all(dest)?;

    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let path = entry.path();
        let dest_path = dest.join(entry.file_name());

        if path.is_dir() {
            copy_dir_recursive(&path, &dest_path)?;
        } else {
            fs::copy(&path, &dest_path)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, PathBuf, PathBuf) {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dest = temp.path().join("dest");
        fs::create_dir(&src).unwrap();
        fs::create_dir(&dest).unwrap();
        (temp, src, dest)
    }

    #[test]
    fn test_copy_file_into_directory() {
        let (_temp, src, dest) = setup();
        let file = src.join("a.txt");
        fs::write(&file, "hello").unwrap();

        StdFilesystem::new().copy(&file, &dest).unwrap();

        assert!(file.exists());
        assert_eq!(fs::read_to_string(dest.join("a.txt")).unwrap(), "hello");
    }

    #[test]
    fn test_copy_file_to_new_name() {
        let (_temp, src, dest) = setup();
        let file = src.join("a.txt");
        fs::write(&file, "hello").unwrap();

        StdFilesystem::new().copy(&file, &dest.join("b.txt")).unwrap();

        assert_eq!(fs::read_to_string(dest.join("b.txt")).unwrap(), "hello");
    }

    #[test]
    fn test_copy_directory_recursively() {
        let (_temp, src, dest) = setup();
        fs::create_dir_all(src.join("tree/nested")).unwrap();
        fs::write(src.join("tree/nested/deep.txt"), "deep").unwrap();

        StdFilesystem::new().copy(&src.join("tree"), &dest).unwrap();

        assert_eq!(
            fs::read_to_string(dest.join("tree/nested/deep.txt")).unwrap(),
            "deep"
        );
    }

    #[test]
    fn test_copy_directory_into_itself_fails() {
        let (_temp, src, _dest) = setup();
        let err = StdFilesystem::new().copy(&src, &src).unwrap_err();
        assert!(err.message.contains("into itself"));
    }

    #[test]
    fn test_copy_into_itself_through_unnormalized_source() {
        let (temp, src, _dest) = setup();
        fs::create_dir(temp.path().join("x")).unwrap();
        fs::write(src.join("f.txt"), "x").unwrap();
        let indirect = temp.path().join("x/../src");

        let err = StdFilesystem::new()
            .copy(&indirect, &src.join("inner"))
            .unwrap_err();

        assert!(err.message.contains("into itself"));
        assert!(!src.join("inner").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_move_into_itself_through_symlinked_destination() {
        let (temp, src, _dest) = setup();
        let link = temp.path().join("link");
        std::os::unix::fs::symlink(&src, &link).unwrap();

        let err = StdFilesystem::new().move_to(&src, &link).unwrap_err();

        assert!(err.message.contains("into itself"));
        assert!(src.exists());
    }

    #[test]
    fn test_move_onto_non_empty_directory_fails() {
        let (_temp, src, dest) = setup();
        fs::create_dir(src.join("tree")).unwrap();
        fs::write(src.join("tree/f.txt"), "new").unwrap();
        fs::create_dir(dest.join("tree")).unwrap();
        fs::write(dest.join("tree/f.txt"), "old").unwrap();

        let result = StdFilesystem::new().move_to(&src.join("tree"), &dest);

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(src.join("tree/f.txt")).unwrap(), "new");
        assert_eq!(fs::read_to_string(dest.join("tree/f.txt")).unwrap(), "old");
    }

    #[test]
    fn test_move_file() {
        let (_temp, src, dest) = setup();
        let file = src.join("a.txt");
        fs::write(&file, "hello").unwrap();

        StdFilesystem::new().move_to(&file, &dest).unwrap();

        assert!(!file.exists());
        assert!(dest.join("a.txt").exists());
    }

    #[test]
    fn test_delete_directory_and_file() {
        let (_temp, src, dest) = setup();
        let file = dest.join("a.txt");
        fs::write(&file, "x").unwrap();
        fs::write(src.join("inner.txt"), "x").unwrap();

        let mut gateway = StdFilesystem::new();
        gateway.delete(&file).unwrap();
        gateway.delete(&src).unwrap();

        assert!(!file.exists());
        assert!(!src.exists());
    }

    #[test]
    fn test_stale_path_is_not_found() {
        let (_temp, src, dest) = setup();
        let missing = src.join("gone.txt");

        let mut gateway = StdFilesystem::new();
        assert_eq!(gateway.copy(&missing, &dest).unwrap_err().kind, FsErrorKind::NotFound);
        assert_eq!(gateway.move_to(&missing, &dest).unwrap_err().kind, FsErrorKind::NotFound);
        assert_eq!(gateway.delete(&missing).unwrap_err().kind, FsErrorKind::NotFound);
    }
}
