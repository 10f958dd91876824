//! Error reporting and recovery prompts.

use filebatch_core::ErrorDecision;

/// Surface used by the engine to talk to the user.
pub trait InteractionSurface {
    /// Show an error message. Never fails.
    fn report_error(&mut self, message: &str);

    /// Ask how to proceed after `message`.
    ///
    /// Blocks until the user answers. Implementations reading raw input must
    /// re-prompt on invalid input instead of returning an error.
    fn prompt_error_decision(&mut self, message: &str) -> ErrorDecision;
}

impl<T: InteractionSurface + ?Sized> InteractionSurface for &mut T {
    fn report_error(&mut self, message: &str) {
        (**self).report_error(message);
    }

    fn prompt_error_decision(&mut self, message: &str) -> ErrorDecision {
        (**self).prompt_error_decision(message)
    }
}

impl<T: InteractionSurface + ?Sized> InteractionSurface for Box<T> {
    fn report_error(&mut self, message: &str) {
        (**self).report_error(message);
    }

    fn prompt_error_decision(&mut self, message: &str) -> ErrorDecision {
        (**self).prompt_error_decision(message)
    }
}
