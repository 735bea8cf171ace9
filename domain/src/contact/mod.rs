//! Contact form message (value object)

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A validated "Send Me a Message" submission
///
/// Fields are stored trimmed. Construction fails if any field is blank or
/// the email address is obviously malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    name: String,
    email: String,
    message: String,
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let name = required("name", name.into())?;
        let email = required("email", email.into())?;
        let message = required("message", message.into())?;

        validate_email(&email)?;

        Ok(Self {
            name,
            email,
            message,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

fn required(field: &str, value: String) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(DomainError::InvalidContact(format!("{field} is required")))
    } else {
        Ok(trimmed.to_string())
    }
}

fn validate_email(email: &str) -> Result<(), DomainError> {
    let invalid = || DomainError::InvalidContact(format!("'{email}' is not a valid email address"));

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') || email.contains(char::is_whitespace) {
        return Err(invalid());
    }
    match domain.split_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() && !domain.ends_with('.') => {
            Ok(())
        }
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_message_is_trimmed() {
        let msg = ContactMessage::new("  Ada ", "ada@example.com", " Hello! ").unwrap();
        assert_eq!(msg.name(), "Ada");
        assert_eq!(msg.email(), "ada@example.com");
        assert_eq!(msg.message(), "Hello!");
    }

    #[test]
    fn test_blank_fields_rejected() {
        assert_eq!(
            ContactMessage::new(" ", "ada@example.com", "hi"),
            Err(DomainError::InvalidContact("name is required".to_string()))
        );
        assert_eq!(
            ContactMessage::new("Ada", "", "hi"),
            Err(DomainError::InvalidContact("email is required".to_string()))
        );
        assert_eq!(
            ContactMessage::new("Ada", "ada@example.com", "\n"),
            Err(DomainError::InvalidContact("message is required".to_string()))
        );
    }

    #[test]
    fn test_malformed_emails_rejected() {
        for email in [
            "ada",
            "@example.com",
            "ada@example",
            "ada@.com",
            "ada@example.",
            "ada@@example.com",
            "ada lovelace@example.com",
        ] {
            assert!(
                ContactMessage::new("Ada", email, "hi").is_err(),
                "accepted {email}"
            );
        }
    }

    #[test]
    fn test_subdomain_email_accepted() {
        assert!(ContactMessage::new("Ada", "ada@mail.example.co.in", "hi").is_ok());
    }
}
