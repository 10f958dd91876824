//! Directory listing entries.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// One row of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntry {
    /// File name, without the parent path.
    pub name: CompactString,
    /// Whether the entry is a directory.
    pub is_dir: bool,
}

impl DirEntry {
    pub fn new(name: impl Into<CompactString>, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            is_dir,
        }
    }

    pub fn kind_label(&self) -> &'static str {
        if self.is_dir { "Folder" } else { "File" }
    }
}
