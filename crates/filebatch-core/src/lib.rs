//! Core types for filebatch.
//!
//! This crate provides the data types shared by the selection/operation
//! engine and the interactive front end: recovery decisions, operation
//! labels, directory entries, error types and engine configuration.

mod config;
mod decision;
mod entry;
mod error;
mod operation;

pub use config::{EngineConfig, EngineConfigBuilder, IgnoreAllScope, DEFAULT_MAX_PATH_LEN};
pub use decision::{ErrorDecision, InvalidDecision, ParseDecisionError};
pub use entry::DirEntry;
pub use error::{FsError, FsErrorKind, PathError};
pub use operation::OperationKind;
