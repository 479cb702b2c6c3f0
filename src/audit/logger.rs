//! Append-only audit log
//!
//! Each entry is written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::error::{TrackerError, TrackerResult};

use super::entry::AuditEntry;

/// Writes audit entries to a line-delimited JSON file
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry
    pub fn log(&self, entry: &AuditEntry) -> TrackerResult<()> {
        if let Some(parent) = self.log_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| TrackerError::Io(format!("Failed to create audit directory: {}", e)))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| TrackerError::Io(format!("Failed to open audit log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| TrackerError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| TrackerError::Io(format!("Failed to write audit entry: {}", e)))?;

        file.flush()
            .map_err(|e| TrackerError::Io(format!("Failed to flush audit log: {}", e)))?;

        debug!(
            operation = %entry.operation,
            entity = %entry.entity_type,
            id = %entry.entity_id,
            "audit entry written"
        );
        Ok(())
    }

    /// Read all entries, oldest first
    pub fn read_all(&self) -> TrackerResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| TrackerError::Io(format!("Failed to open audit log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                TrackerError::Io(format!("Failed to read audit log line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: AuditEntry = serde_json::from_str(&line).map_err(|e| {
                TrackerError::Json(format!(
                    "Failed to parse audit entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// The most recent `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> TrackerResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::{EntityType, Operation};
    use serde_json::json;
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        (logger, temp_dir)
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        let entry = AuditEntry::create(EntityType::Budget, "Food", &json!({"amount": 1000}));

        logger.log(&entry).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].entity_type, EntityType::Budget);
    }

    #[test]
    fn test_read_recent() {
        let (logger, _temp) = create_test_logger();

        for i in 0..10 {
            let entry = AuditEntry::create(EntityType::Goal, format!("goal-{}", i), &json!(i));
            logger.log(&entry).unwrap();
        }

        let recent = logger.read_recent(3).unwrap();
        let ids: Vec<&str> = recent.iter().map(|e| e.entity_id.as_str()).collect();
        assert_eq!(ids, vec!["goal-7", "goal-8", "goal-9"]);

        assert_eq!(logger.read_recent(50).unwrap().len(), 10);
    }

    #[test]
    fn test_empty_log() {
        let (logger, _temp) = create_test_logger();

        assert!(!logger.exists());
        assert!(logger.read_all().unwrap().is_empty());
        assert!(logger.read_recent(5).unwrap().is_empty());
    }

    #[test]
    fn test_survives_restart() {
        let (logger, temp) = create_test_logger();
        let entry = AuditEntry::create(EntityType::Transaction, "2024-05-01/Food", &json!({}));
        logger.log(&entry).unwrap();

        let reopened = AuditLogger::new(temp.path().join("audit.log"));
        assert_eq!(reopened.read_all().unwrap().len(), 1);
    }

    #[test]
    fn test_corrupt_line_is_an_error() {
        let (logger, _temp) = create_test_logger();
        std::fs::write(logger.path(), "not json\n").unwrap();
        assert!(logger.read_all().is_err());
    }
}
