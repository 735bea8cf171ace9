//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Diagnostic log file (tracing output); stderr when unset
    pub file: Option<String>,
    /// JSONL transcript of answered questions; disabled when unset
    pub transcript: Option<String>,
    /// JSONL outbox for contact messages
    pub outbox: Option<String>,
}

impl FileLoggingConfig {
    /// Outbox path, falling back to `<data_dir>/folio/outbox.jsonl`
    pub fn outbox_path(&self) -> Option<PathBuf> {
        match &self.outbox {
            Some(path) => Some(PathBuf::from(path)),
            None => dirs::data_dir().map(|d| d.join("folio").join("outbox.jsonl")),
        }
    }
}
