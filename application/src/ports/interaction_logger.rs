//! Port for recording answered questions to a transcript.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures each
//! question/answer pair in a machine-readable format (JSONL).

use folio_domain::Interaction;

/// Port for logging interactions to a structured transcript.
///
/// The `log` method is synchronous and non-fallible; implementations
/// swallow write failures so answering is never disrupted.
pub trait InteractionLogger: Send + Sync {
    /// Record one answered question.
    fn log(&self, interaction: &Interaction);
}

/// No-op implementation for tests and when no transcript is configured.
pub struct NoInteractionLogger;

impl InteractionLogger for NoInteractionLogger {
    fn log(&self, _interaction: &Interaction) {}
}
