//! Domain layer for folio
//!
//! This crate contains the portfolio content model and the question
//! responder. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! ## Portfolio
//!
//! Immutable content (profile, skills, projects, AI experience, contact
//! details) built once with [`Portfolio::default_profile`] and split into
//! navigable [`Section`]s.
//!
//! ## Question Responder
//!
//! A [`RuleSet`] of ordered [`KeywordRule`]s. The first rule whose phrase
//! occurs in the lowercased question supplies the answer; otherwise a
//! fallback answer is returned. Answering never fails.

pub mod config;
pub mod contact;
pub mod core;
pub mod interaction;
pub mod portfolio;
pub mod responder;

// Re-export commonly used types
pub use config::OutputFormat;
pub use contact::ContactMessage;
pub use core::{error::DomainError, question::Question};
pub use interaction::Interaction;
pub use portfolio::{Portfolio, Section};
pub use responder::{
    Answer, KeywordRule, PresetQuestions, QuestionSelection, RuleMatch, RuleSet,
};
