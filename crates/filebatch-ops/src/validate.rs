//! Path validation applied to destinations and every batch item.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use filebatch_core::{EngineConfig, PathError, DEFAULT_MAX_PATH_LEN};

/// Rejects paths that are too long or cannot be resolved.
#[derive(Debug, Clone, Copy)]
pub struct PathValidator {
    max_len: usize,
}

impl Default for PathValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PATH_LEN)
    }
}

impl PathValidator {
    pub fn new(max_len: usize) -> Self {
        Self { max_len }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.max_path_len)
    }

    /// Validate `path` and return its resolved form.
    ///
    /// The length limit applies to the lexically normalized path, before
    /// resolution. Paths that do not exist yet are resolved lexically.
    pub fn validate(&self, path: &Path) -> Result<PathBuf, PathError> {
        let raw = path.as_os_str();
        if raw.is_empty() {
            return Err(PathError::malformed("empty path"));
        }
        if raw.as_encoded_bytes().contains(&0) {
            return Err(PathError::malformed("embedded null byte"));
        }

        let normalized: PathBuf = path.components().collect();
        let len = normalized.to_string_lossy().chars().count();
        if len > self.max_len {
            return Err(PathError::TooLong {
                len,
                max: self.max_len,
            });
        }

        match fs::canonicalize(&normalized) {
            Ok(resolved) => Ok(resolved),
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::PermissionDenied) => {
                std::path::absolute(&normalized).map_err(|source| PathError::Unresolvable {
                    path: normalized.clone(),
                    source,
                })
            }
            Err(source) => Err(PathError::Unresolvable {
                path: normalized,
                source,
            }),
        }
    }
}
