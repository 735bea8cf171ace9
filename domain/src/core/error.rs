//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// The question responder itself never fails; these cover the inputs
/// around it (preset selection, contact form, section names).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Unknown preset question #{index} (choose 1-{available})")]
    UnknownPreset { index: usize, available: usize },

    #[error("Unknown section: {0}")]
    UnknownSection(String),

    #[error("Invalid contact message: {0}")]
    InvalidContact(String),
}
