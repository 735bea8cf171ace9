//! Port for delivering contact form messages.

use async_trait::async_trait;
use folio_domain::ContactMessage;
use thiserror::Error;

/// Errors from an outbox adapter
#[derive(Error, Debug)]
pub enum OutboxError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Where validated contact messages are handed off
#[async_trait]
pub trait MessageOutbox: Send + Sync {
    /// Deliver (or queue) a message
    async fn deliver(&self, message: &ContactMessage) -> Result<(), OutboxError>;
}
