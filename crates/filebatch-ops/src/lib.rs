//! Selection and batch operation engine for filebatch.
//!
//! The [`BatchEngine`] consumes the pending selection from a
//! [`SelectionProvider`], validates every path, runs each item through a
//! [`FilesystemGateway`] and asks an [`InteractionSurface`] how to proceed
//! when an item fails. The collaborators are traits so the engine can be
//! driven by the real filesystem and console or by in-memory fakes.

mod engine;
mod explorer;
mod gateway;
mod interaction;
mod selection;
mod validate;

pub use engine::BatchEngine;
pub use explorer::{DirectoryExplorer, Navigation};
pub use gateway::{FilesystemGateway, StdFilesystem};
pub use interaction::InteractionSurface;
pub use selection::{FileListProvider, FileSelector, SelectionProvider};
pub use validate::PathValidator;
