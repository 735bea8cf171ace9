//! Application layer for folio
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    interaction_logger::{InteractionLogger, NoInteractionLogger},
    message_outbox::{MessageOutbox, OutboxError},
    progress::{AskProgressNotifier, NoProgress},
};
pub use use_cases::ask_question::AskQuestionUseCase;
pub use use_cases::send_message::{SendMessageError, SendMessageInput, SendMessageUseCase};
