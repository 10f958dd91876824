//! Pending selection held between browsing and a batch operation.

use std::path::PathBuf;

/// Holds the most recent selection and hands it out exactly once.
pub trait SelectionProvider {
    /// Return the current selection and leave an empty one behind.
    fn take_and_reset(&mut self) -> Vec<PathBuf>;
}

impl<T: SelectionProvider + ?Sized> SelectionProvider for &mut T {
    fn take_and_reset(&mut self) -> Vec<PathBuf> {
        (**self).take_and_reset()
    }
}

impl<T: SelectionProvider + ?Sized> SelectionProvider for Box<T> {
    fn take_and_reset(&mut self) -> Vec<PathBuf> {
        (**self).take_and_reset()
    }
}

/// Resolves listing indices to full paths.
pub trait FileListProvider {
    /// Paths for `indices` in the given order. Out-of-range indices are dropped.
    fn subset(&self, indices: &[usize]) -> Vec<PathBuf>;
}

/// Selection store fed from a directory listing.
#[derive(Debug, Clone, Default)]
pub struct FileSelector {
    selected: Vec<PathBuf>,
}

impl FileSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection with the entries at `indices` in `provider`.
    pub fn select_by_indices(
        &mut self,
        indices: &[usize],
        provider: &impl FileListProvider,
    ) -> &[PathBuf] {
        self.selected = provider.subset(indices);
        tracing::debug!(
            requested = indices.len(),
            selected = self.selected.len(),
            "Selection updated"
        );
        &self.selected
    }

    /// Replace the selection with explicit paths.
    pub fn select(&mut self, paths: impl IntoIterator<Item = PathBuf>) {
        self.selected = paths.into_iter().collect();
    }

    pub fn selected(&self) -> &[PathBuf] {
        &self.selected
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

impl SelectionProvider for FileSelector {
    fn take_and_reset(&mut self) -> Vec<PathBuf> {
        std::mem::take(&mut self.selected)
    }
}
