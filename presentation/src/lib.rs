//! Presentation layer for folio
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive Q&A interface.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::{Cli, OutputFormatArg};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use output::formatter::{PortfolioFormatter, formatter_for};
pub use output::json::JsonFormatter;
pub use progress::reporter::{SimpleProgress, ThinkingSpinner};
