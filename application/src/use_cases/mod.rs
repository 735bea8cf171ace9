//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod ask_question;
pub mod send_message;
