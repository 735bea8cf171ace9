//! Interactive chat module
//!
//! Provides a readline-based interactive Q&A interface.

mod repl;

pub use repl::{ChatRepl, ReplCommand};
