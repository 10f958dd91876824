//! Batch operation engine with per-item error recovery.

use std::path::Path;

use filebatch_core::{EngineConfig, ErrorDecision, FsError, IgnoreAllScope, OperationKind};

use crate::gateway::FilesystemGateway;
use crate::interaction::InteractionSurface;
use crate::selection::SelectionProvider;
use crate::validate::PathValidator;

/// Applies copy, move and delete to the pending selection.
///
/// Every batch call consumes the selection, so calling an operation twice
/// without selecting again processes nothing the second time. Failures never
/// propagate: they are reported through the [`InteractionSurface`] and show
/// up as a lower returned count.
#[derive(Debug)]
pub struct BatchEngine<S, F, U> {
    selection: S,
    gateway: F,
    ui: U,
    validator: PathValidator,
    config: EngineConfig,
    ignore_all_errors: bool,
}

impl<S, F, U> BatchEngine<S, F, U>
where
    S: SelectionProvider,
    F: FilesystemGateway,
    U: InteractionSurface,
{
    /// Create an engine with the default configuration.
    pub fn new(selection: S, gateway: F, ui: U) -> Self {
        Self::with_config(selection, gateway, ui, EngineConfig::default())
    }

    pub fn with_config(selection: S, gateway: F, ui: U, config: EngineConfig) -> Self {
        Self {
            selection,
            gateway,
            ui,
            validator: PathValidator::from_config(&config),
            config,
            ignore_all_errors: false,
        }
    }

    /// Copy the selection to `destination`. Returns the number of items copied.
    pub fn copy_files(&mut self, destination: impl AsRef<Path>) -> usize {
        let destination = destination.as_ref();
        if !self.check_path(destination) {
            return 0;
        }
        self.run(OperationKind::Copy, |gateway, source| {
            gateway.copy(source, destination)
        })
    }

    /// Move the selection to `destination`. Returns the number of items moved.
    pub fn move_files(&mut self, destination: impl AsRef<Path>) -> usize {
        let destination = destination.as_ref();
        if !self.check_path(destination) {
            return 0;
        }
        self.run(OperationKind::Move, |gateway, source| {
            gateway.move_to(source, destination)
        })
    }

    /// Delete the selection. Returns the number of items deleted.
    pub fn delete_files(&mut self) -> usize {
        self.run(OperationKind::Delete, |gateway, target| gateway.delete(target))
    }

    /// Whether an earlier "ignore all" is suppressing prompts.
    pub fn ignoring_all_errors(&self) -> bool {
        self.ignore_all_errors
    }

    /// Resume prompting on the next failure.
    pub fn reset_ignore_all(&mut self) {
        self.ignore_all_errors = false;
    }

    pub fn selection_mut(&mut self) -> &mut S {
        &mut self.selection
    }

    pub fn gateway(&self) -> &F {
        &self.gateway
    }

    pub fn gateway_mut(&mut self) -> &mut F {
        &mut self.gateway
    }

    pub fn interaction(&self) -> &U {
        &self.ui
    }

    pub fn interaction_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    fn run<Op>(&mut self, kind: OperationKind, mut op: Op) -> usize
    where
        Op: FnMut(&mut F, &Path) -> Result<(), FsError>,
    {
        if self.config.ignore_all_scope == IgnoreAllScope::Batch {
            self.ignore_all_errors = false;
        }

        let batch = self.selection.take_and_reset();
        let total = batch.len();
        let mut succeeded = 0;

        for source in &batch {
            if !self.check_path(source) {
                continue;
            }

            tracing::debug!(operation = %kind, path = %source.display(), "Processing item");

            match op(&mut self.gateway, source) {
                Ok(()) => succeeded += 1,
                Err(err) => match self.handle_error(kind, &err) {
                    ErrorDecision::Ignore => {}
                    ErrorDecision::IgnoreAll => self.ignore_all_errors = true,
                    ErrorDecision::Stop => {
                        tracing::info!(operation = %kind, "Batch stopped by user");
                        break;
                    }
                },
            }
        }

        tracing::info!(operation = %kind, succeeded, total, "Batch finished");
        succeeded
    }

    /// Report a failed item and decide how to continue.
    fn handle_error(&mut self, kind: OperationKind, err: &FsError) -> ErrorDecision {
        let message = format!("{kind}: {err}");
        tracing::warn!(kind = ?err.kind, "{message}");
        self.ui.report_error(&message);

        if self.ignore_all_errors {
            ErrorDecision::IgnoreAll
        } else {
            self.ui.prompt_error_decision(&message)
        }
    }

    /// Validate `path`, reporting it if rejected.
    fn check_path(&mut self, path: &Path) -> bool {
        match self.validator.validate(path) {
            Ok(resolved) => {
                tracing::trace!(path = %path.display(), resolved = %resolved.display(), "Path ok");
                true
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), "Rejected path: {err}");
                self.ui.report_error(&format!("Invalid path: {err}"));
                false
            }
        }
    }
}
