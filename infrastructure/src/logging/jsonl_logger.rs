//! JSONL file writer for answered questions.
//!
//! Each [`Interaction`] is serialized as a single JSON line with a `type`
//! field and `timestamp`, appended to the file via a buffered writer.

use folio_application::InteractionLogger;
use folio_domain::Interaction;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;
use tracing::warn;

/// Build one transcript record for an interaction.
pub(crate) fn interaction_record(interaction: &Interaction, timestamp: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "interaction",
        "timestamp": timestamp,
        "question": interaction.question.content(),
        "answer": interaction.answer_text(),
        "rule": interaction.matched_rule().map(|r| r.keyword.as_str()),
    })
}

/// JSONL interaction transcript that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Appends to an existing file.
/// Flushes on `Drop`.
pub struct JsonlInteractionLogger {
    writer: Mutex<BufWriter<File>>,
}

impl JsonlInteractionLogger {
    /// Create a new logger appending to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create transcript directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open transcript file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
        })
    }
}

impl InteractionLogger for JsonlInteractionLogger {
    fn log(&self, interaction: &Interaction) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let record = interaction_record(interaction, &timestamp);

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            if let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
                warn!("Failed to write transcript entry: {}", e);
            }
        }
    }
}

impl Drop for JsonlInteractionLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_domain::{Question, RuleSet};

    fn interaction(text: &str) -> Interaction {
        let question = Question::try_new(text).unwrap();
        let answer = RuleSet::standard().respond(&question);
        Interaction::new(question, answer)
    }

    #[test]
    fn test_writes_one_line_per_interaction() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcript.jsonl");
        let logger = JsonlInteractionLogger::new(&path).unwrap();

        logger.log(&interaction("What interests you about generative AI?"));
        logger.log(&interaction("Favorite color?"));
        drop(logger);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.trim().lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["type"], "interaction");
        assert_eq!(first["rule"], "generative ai");
        assert!(first.get("timestamp").is_some());

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["question"], "Favorite color?");
        assert!(second["rule"].is_null());
    }

    #[test]
    fn test_appends_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("transcript.jsonl");

        for _ in 0..2 {
            let logger = JsonlInteractionLogger::new(&path).unwrap();
            logger.log(&interaction("prompt engineering?"));
        }

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_record_shape() {
        let record = interaction_record(&interaction("transformer architecture"), "t0");
        assert_eq!(record["timestamp"], "t0");
        assert_eq!(record["rule"], "transformer architecture");
    }
}
