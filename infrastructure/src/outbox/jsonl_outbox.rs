//! Append-only JSONL outbox for contact messages.

use async_trait::async_trait;
use folio_application::{MessageOutbox, OutboxError};
use folio_domain::ContactMessage;
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Writes each contact message as one JSON line.
///
/// The file and its parent directories are created on first delivery.
pub struct JsonlMessageOutbox {
    path: PathBuf,
}

impl JsonlMessageOutbox {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl MessageOutbox for JsonlMessageOutbox {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), OutboxError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let record = serde_json::json!({
            "timestamp": chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            "name": message.name(),
            "email": message.email(),
            "message": message.message(),
        });
        let mut line = serde_json::to_string(&record)
            .map_err(|e| OutboxError::Serialization(e.to_string()))?;
        line.push('\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        debug!("Appended contact message to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_deliver_appends_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inbox").join("outbox.jsonl");
        let outbox = JsonlMessageOutbox::new(&path);

        let first = ContactMessage::new("Ada", "ada@example.com", "Hello").unwrap();
        let second = ContactMessage::new("Alan", "alan@example.org", "Hi there").unwrap();
        outbox.deliver(&first).await.unwrap();
        outbox.deliver(&second).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let record: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(record["name"], "Alan");
        assert_eq!(record["email"], "alan@example.org");
        assert_eq!(record["message"], "Hi there");
        assert!(record.get("timestamp").is_some());
    }

    #[tokio::test]
    async fn test_deliver_to_directory_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let outbox = JsonlMessageOutbox::new(dir.path());

        let message = ContactMessage::new("Ada", "ada@example.com", "Hello").unwrap();
        assert!(matches!(
            outbox.deliver(&message).await,
            Err(OutboxError::Io(_))
        ));
    }
}
