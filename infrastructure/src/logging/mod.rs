//! Logging infrastructure: structured interaction transcript.
//!
//! Provides [`JsonlInteractionLogger`], a JSONL file writer that implements
//! the [`InteractionLogger`](folio_application::InteractionLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlInteractionLogger;
