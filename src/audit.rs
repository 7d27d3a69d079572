use anyhow::Result;
use chrono::{DateTime, Utc};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub level: &'static str,
    pub masked_card: String,
    pub token: String,
}

impl AuditEntry {
    pub fn processed(masked_card: String, token: String) -> Self {
        Self {
            timestamp: Utc::now(),
            level: "INFO",
            masked_card,
            token,
        }
    }

    pub fn render(&self) -> String {
        format!(
            "{} {}: Payment processed for card {}, token={}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
            self.level,
            self.masked_card,
            self.token
        )
    }
}

/// Append-only audit sink. Implementations must write each entry as one
/// complete, non-interleaved record.
pub trait AuditSink: Send + Sync {
    fn append(&self, entry: AuditEntry);
}

/// Production sink: one line per entry appended to a log file, flushed per
/// append. The mutex serializes concurrent writers.
pub struct FileAuditSink {
    file: Mutex<std::fs::File>,
}

impl FileAuditSink {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file: Mutex::new(file) })
    }
}

impl AuditSink for FileAuditSink {
    fn append(&self, entry: AuditEntry) {
        let line = entry.render();
        let mut file = match self.file.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = writeln!(file, "{line}").and_then(|_| file.flush()) {
            tracing::error!("audit append failed: {}", e);
        }
    }
}

/// Capturing sink for tests.
#[derive(Default)]
pub struct MemorySink {
    pub entries: Mutex<Vec<AuditEntry>>,
}

impl AuditSink for MemorySink {
    fn append(&self, entry: AuditEntry) {
        let mut entries = match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.push(entry);
    }
}
