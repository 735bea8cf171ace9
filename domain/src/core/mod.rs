//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a validated, non-blank question for the responder
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod question;
pub mod string;
