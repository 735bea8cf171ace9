//! Send Message use case.
//!
//! Validates a contact form submission and hands it to the
//! [`MessageOutbox`] port.

use crate::ports::message_outbox::{MessageOutbox, OutboxError};
use folio_domain::{ContactMessage, DomainError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while sending a contact message.
#[derive(Error, Debug)]
pub enum SendMessageError {
    #[error(transparent)]
    Invalid(#[from] DomainError),

    #[error("Could not deliver message: {0}")]
    Outbox(#[from] OutboxError),
}

/// Raw form input for the [`SendMessageUseCase`].
#[derive(Debug, Clone, Default)]
pub struct SendMessageInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl SendMessageInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}

/// Use case for the "Send Me a Message" form.
pub struct SendMessageUseCase {
    outbox: Arc<dyn MessageOutbox>,
}

impl SendMessageUseCase {
    pub fn new(outbox: Arc<dyn MessageOutbox>) -> Self {
        Self { outbox }
    }

    pub async fn execute(&self, input: SendMessageInput) -> Result<ContactMessage, SendMessageError> {
        let message = ContactMessage::new(input.name, input.email, input.message)?;

        if let Err(e) = self.outbox.deliver(&message).await {
            warn!("Failed to deliver contact message: {}", e);
            return Err(e.into());
        }

        info!("Contact message from {} queued", message.email());
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryOutbox {
        delivered: Mutex<Vec<ContactMessage>>,
    }

    #[async_trait]
    impl MessageOutbox for MemoryOutbox {
        async fn deliver(&self, message: &ContactMessage) -> Result<(), OutboxError> {
            self.delivered.lock().unwrap().push(message.clone());
            Ok(())
        }
    }

    struct BrokenOutbox;

    #[async_trait]
    impl MessageOutbox for BrokenOutbox {
        async fn deliver(&self, _message: &ContactMessage) -> Result<(), OutboxError> {
            Err(OutboxError::Io(std::io::Error::other("disk full")))
        }
    }

    #[tokio::test]
    async fn test_valid_message_is_delivered() {
        let outbox = Arc::new(MemoryOutbox::default());
        let use_case = SendMessageUseCase::new(outbox.clone());

        let sent = use_case
            .execute(SendMessageInput::new("Ada", "ada@example.com", "Let's talk"))
            .await
            .unwrap();

        assert_eq!(sent.name(), "Ada");
        assert_eq!(outbox.delivered.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_message_is_not_delivered() {
        let outbox = Arc::new(MemoryOutbox::default());
        let use_case = SendMessageUseCase::new(outbox.clone());

        let result = use_case
            .execute(SendMessageInput::new("Ada", "not-an-email", "Hi"))
            .await;

        assert!(matches!(
            result,
            Err(SendMessageError::Invalid(DomainError::InvalidContact(_)))
        ));
        assert!(outbox.delivered.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_outbox_failure_is_reported() {
        let use_case = SendMessageUseCase::new(Arc::new(BrokenOutbox));

        let result = use_case
            .execute(SendMessageInput::new("Ada", "ada@example.com", "Hi"))
            .await;

        assert!(matches!(result, Err(SendMessageError::Outbox(_))));
    }
}
