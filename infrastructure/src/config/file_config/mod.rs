//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod behavior;
mod logging;
mod output;
mod repl;

pub use behavior::FileBehaviorConfig;
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Delays above this are almost certainly a unit mix-up (seconds vs ms)
const MAX_REASONABLE_DELAY_MS: u64 = 10_000;

/// Configuration issues reported by [`FileConfig::validate`]
///
/// These are warnings: the configuration is still usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("behavior.thinking_delay_ms = {0} is unusually long (over 10000 ms)")]
    ExcessiveDelay(u64),

    #[error("{field} is set but empty")]
    EmptyPath { field: &'static str },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Answer pacing
    pub behavior: FileBehaviorConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Log, transcript and outbox locations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.behavior.thinking_delay_ms > MAX_REASONABLE_DELAY_MS {
            issues.push(ConfigValidationError::ExcessiveDelay(
                self.behavior.thinking_delay_ms,
            ));
        }

        let paths = [
            ("repl.history_file", &self.repl.history_file),
            ("logging.file", &self.logging.file),
            ("logging.transcript", &self.logging.transcript),
            ("logging.outbox", &self.logging.outbox),
        ];
        for (field, value) in paths {
            if value.as_deref().is_some_and(|p| p.trim().is_empty()) {
                issues.push(ConfigValidationError::EmptyPath { field });
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[behavior]
thinking_delay_ms = 250

[output]
format = "json"
color = false

[repl]
show_progress = false
history_file = "~/.local/share/folio/history.txt"

[logging]
transcript = "/tmp/folio.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.behavior.thinking_delay_ms, 250);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
        assert_eq!(
            config.logging.transcript,
            Some("/tmp/folio.jsonl".to_string())
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[output]
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        // Defaults should apply
        assert_eq!(config.behavior.thinking_delay_ms, 1000);
        assert!(config.output.format.is_none());
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_issues() {
        let mut config = FileConfig::default();
        config.behavior.thinking_delay_ms = 60_000;
        config.logging.transcript = Some("  ".to_string());

        let issues = config.validate();
        assert_eq!(
            issues,
            vec![
                ConfigValidationError::ExcessiveDelay(60_000),
                ConfigValidationError::EmptyPath {
                    field: "logging.transcript"
                },
            ]
        );
    }
}
