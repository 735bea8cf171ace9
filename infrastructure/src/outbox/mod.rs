//! Contact message outbox adapters.

mod jsonl_outbox;

pub use jsonl_outbox::JsonlMessageOutbox;
