//! Progress notification port
//!
//! Defines the interface for reporting the "thinking" pause while a
//! question is being answered.

use folio_domain::Question;

/// Callback for progress updates while answering a question
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, nothing).
pub trait AskProgressNotifier: Send + Sync {
    /// Called before the thinking pause starts
    fn on_thinking_start(&self, question: &Question);

    /// Called once the answer is ready to be revealed
    fn on_thinking_end(&self);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl AskProgressNotifier for NoProgress {
    fn on_thinking_start(&self, _question: &Question) {}
    fn on_thinking_end(&self) {}
}
