//! Infrastructure layer for folio
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod outbox;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileBehaviorConfig, FileConfig, FileLoggingConfig,
    FileOutputConfig, FileOutputFormat, FileReplConfig,
};
pub use logging::JsonlInteractionLogger;
pub use outbox::JsonlMessageOutbox;
