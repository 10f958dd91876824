//! Directory browsing: listing, navigation and index resolution.

use std::fs;
use std::path::{Path, PathBuf};

use compact_str::CompactString;
use filebatch_core::{DirEntry, FsError};
use itertools::Itertools;

use crate::selection::FileListProvider;

/// Result of [`DirectoryExplorer::navigate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// The explorer moved into this directory.
    Entered(PathBuf),
    /// The entry is a file and cannot be opened.
    NotADirectory(CompactString),
    /// No entry at that index; nothing changed.
    OutOfRange,
}

/// Tracks the current directory and its listing.
#[derive(Debug, Clone)]
pub struct DirectoryExplorer {
    current: PathBuf,
    entries: Vec<DirEntry>,
    show_hidden: bool,
}

impl DirectoryExplorer {
    /// Open `path` and list it, including hidden entries.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, FsError> {
        Self::open_with_hidden(path, true)
    }

    /// Open `path`, listing hidden entries only if `show_hidden` is set.
    pub fn open_with_hidden(path: impl AsRef<Path>, show_hidden: bool) -> Result<Self, FsError> {
        let current = fs::canonicalize(path.as_ref())?;
        let entries = read_entries(&current, show_hidden)?;
        tracing::debug!(path = %current.display(), count = entries.len(), "Opened directory");
        Ok(Self {
            current,
            entries,
            show_hidden,
        })
    }

    pub fn current_path(&self) -> &Path {
        &self.current
    }

    pub fn entries(&self) -> &[DirEntry] {
        &self.entries
    }

    /// Re-read the current directory.
    pub fn refresh(&mut self) -> Result<(), FsError> {
        self.entries = read_entries(&self.current, self.show_hidden)?;
        Ok(())
    }

    /// Enter the directory at `index` of the current listing.
    pub fn navigate(&mut self, index: usize) -> Result<Navigation, FsError> {
        let Some(entry) = self.entries.get(index) else {
            return Ok(Navigation::OutOfRange);
        };

        let target = self.current.join(entry.name.as_str());
        if !target.is_dir() {
            return Ok(Navigation::NotADirectory(entry.name.clone()));
        }

        self.set_current(target.clone())?;
        Ok(Navigation::Entered(target))
    }

    /// Move to the parent directory. Returns `false` at the filesystem root.
    pub fn go_to_parent(&mut self) -> Result<bool, FsError> {
        let Some(parent) = self.current.parent().map(Path::to_path_buf) else {
            return Ok(false);
        };
        self.set_current(parent)?;
        Ok(true)
    }

    fn set_current(&mut self, path: PathBuf) -> Result<(), FsError> {
        // Listing first so a failed read leaves the explorer where it was
        let entries = read_entries(&path, self.show_hidden)?;
        self.current = path;
        self.entries = entries;
        Ok(())
    }
}

impl FileListProvider for DirectoryExplorer {
    fn subset(&self, indices: &[usize]) -> Vec<PathBuf> {
        indices
            .iter()
            .filter_map(|&index| self.entries.get(index))
            .map(|entry| self.current.join(entry.name.as_str()))
            .collect()
    }
}

fn read_entries(dir: &Path, show_hidden: bool) -> Result<Vec<DirEntry>, FsError> {
    let entries = fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            DirEntry::new(name, entry.path().is_dir())
        })
        .filter(|entry| show_hidden || !entry.name.starts_with('.'))
        .sorted_by(|a, b| a.name.cmp(&b.name))
        .collect();
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("docs")).unwrap();
        fs::write(temp.path().join("docs/readme.md"), "# hi").unwrap();
        fs::write(temp.path().join("b.txt"), "b").unwrap();
        fs::write(temp.path().join("a.txt"), "a").unwrap();
        fs::write(temp.path().join(".hidden"), "h").unwrap();
        temp
    }

    fn names(explorer: &DirectoryExplorer) -> Vec<&str> {
        explorer.entries().iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_listing_is_sorted() {
        let temp = create_test_tree();
        let explorer = DirectoryExplorer::open(temp.path()).unwrap();
        assert_eq!(names(&explorer), vec![".hidden", "a.txt", "b.txt", "docs"]);
        assert!(explorer.entries()[3].is_dir);
    }

    #[test]
    fn test_hidden_entries_can_be_skipped() {
        let temp = create_test_tree();
        let explorer = DirectoryExplorer::open_with_hidden(temp.path(), false).unwrap();
        assert_eq!(names(&explorer), vec!["a.txt", "b.txt", "docs"]);
    }

    #[test]
    fn test_navigate_and_back() {
        let temp = create_test_tree();
        let root = fs::canonicalize(temp.path()).unwrap();
        let mut explorer = DirectoryExplorer::open_with_hidden(temp.path(), false).unwrap();

        let nav = explorer.navigate(2).unwrap();
        assert_eq!(nav, Navigation::Entered(root.join("docs")));
        assert_eq!(names(&explorer), vec!["readme.md"]);

        assert!(explorer.go_to_parent().unwrap());
        assert_eq!(explorer.current_path(), root);
    }

    #[test]
    fn test_navigate_into_file_or_out_of_range() {
        let temp = create_test_tree();
        let mut explorer = DirectoryExplorer::open_with_hidden(temp.path(), false).unwrap();
        let before = explorer.current_path().to_path_buf();

        assert_eq!(
            explorer.navigate(0).unwrap(),
            Navigation::NotADirectory("a.txt".into())
        );
        assert_eq!(explorer.navigate(42).unwrap(), Navigation::OutOfRange);
        assert_eq!(explorer.current_path(), before);
    }

    #[test]
    fn test_subset_drops_out_of_range() {
        let temp = create_test_tree();
        let explorer = DirectoryExplorer::open_with_hidden(temp.path(), false).unwrap();
        let root = explorer.current_path().to_path_buf();

        let paths = explorer.subset(&[1, 7, 0]);
        assert_eq!(paths, vec![root.join("b.txt"), root.join("a.txt")]);
    }

    #[test]
    fn test_open_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        assert!(DirectoryExplorer::open(temp.path().join("nope")).is_err());
    }
}
