//! Durable append-only event log.
//!
//! Every received event is recorded as one JSON line:
//!
//! ```text
//! {"ts":1730000000000,"payload":{...original event...}}
//! ```
//!
//! The log is write-only from the relay's perspective. Appends are
//! at-least-once with no dedup; ordering across concurrent requests is
//! best-effort. The caller treats a failed append as non-fatal.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::Serialize;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::event::Event;

/// One logged record: receive timestamp plus the verbatim event.
#[derive(Serialize)]
struct LogRecord<'a> {
    ts: u64,
    payload: &'a Event,
}

/// Append-only JSONL store for inbound events.
#[derive(Debug, Clone)]
pub struct EventLog {
    path: PathBuf,
}

impl EventLog {
    /// Create an event log writing to the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Append one event with the current timestamp.
    ///
    /// Opens the file in create+append mode per call; O_APPEND keeps
    /// concurrent line writes from interleaving without any locking.
    pub async fn append(&self, event: &Event) -> Result<()> {
        let record = LogRecord {
            ts: epoch_millis(),
            payload: event,
        };

        let mut line = serde_json::to_vec(&record).context("Failed to serialize log record")?;
        line.push(b'\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .with_context(|| format!("Failed to open log file {}", self.path.display()))?;

        file.write_all(&line)
            .await
            .context("Failed to append log record")?;
        file.flush().await.context("Failed to flush log record")?;

        Ok(())
    }
}

/// Current time as milliseconds since the Unix epoch.
fn epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn sample_event() -> Event {
        let mut event = Event::new();
        event.insert("name".to_string(), Value::from("Ada"));
        event.insert("score".to_string(), Value::from(80));
        event
    }

    #[tokio::test]
    async fn test_append_writes_one_line() {
        let dir = tempfile::tempdir().unwrap();
        let log = EventLog::new(dir.path().join("webhook.log"));

        log.append(&sample_event()).await.unwrap();

        let contents = tokio::fs::read_to_string(dir.path().join("webhook.log"))
            .await
            .unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 1);

        let record: Value = serde_json::from_str(lines[0]).unwrap();
        assert!(record["ts"].as_u64().unwrap() > 0);
        assert_eq!(record["payload"]["name"], "Ada");
        assert_eq!(record["payload"]["score"], 80);
    }

    #[tokio::test]
    async fn test_append_accumulates() {
        let dir = tempfile::tempdir().unwrap();
        let log = EventLog::new(dir.path().join("webhook.log"));

        log.append(&sample_event()).await.unwrap();
        log.append(&Event::new()).await.unwrap();

        let contents = tokio::fs::read_to_string(dir.path().join("webhook.log"))
            .await
            .unwrap();
        assert_eq!(contents.lines().count(), 2);

        let second: Value = serde_json::from_str(contents.lines().nth(1).unwrap()).unwrap();
        assert_eq!(second["payload"], serde_json::json!({}));
    }

    #[tokio::test]
    async fn test_append_fails_on_unwritable_path() {
        let log = EventLog::new(PathBuf::from("/nonexistent-dir/webhook.log"));
        assert!(log.append(&sample_event()).await.is_err());
    }
}
