//! Flat-file I/O for comma-delimited records
//!
//! Files have no header row. Appends go straight to the end of the file;
//! full rewrites go through a temp file and a rename so a failed write never
//! leaves a half-written file behind.

use std::fs::{self, File, OpenOptions};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{TrackerError, TrackerResult};

/// Read every record in a file, returning an empty list if it doesn't exist
///
/// Blank lines are skipped. The first record that cannot be parsed stops the
/// read with [`TrackerError::InvalidRecord`] naming its line.
pub fn read_records<T, P>(path: P) -> TrackerResult<Vec<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .map_err(|e| TrackerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row.map_err(|e| {
            let line = e.position().map(|p| p.line() as usize).unwrap_or(index + 1);
            TrackerError::invalid_record(path, line, e.to_string())
        })?;

        if row.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let line = row.position().map(|p| p.line() as usize).unwrap_or(index + 1);
        let record = row
            .deserialize(None)
            .map_err(|e| TrackerError::invalid_record(path, line, deserialize_reason(&e)))?;
        records.push(record);
    }

    Ok(records)
}

fn deserialize_reason(err: &csv::Error) -> String {
    match err.kind() {
        csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
        _ => err.to_string(),
    }
}

/// Append one record as a new line, creating the file if needed
pub fn append_record<T, P>(path: P, record: &T) -> TrackerResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    ensure_parent(path)?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| TrackerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.serialize(record)?;
    writer
        .flush()
        .map_err(|e| TrackerError::Storage(format!("Failed to flush data: {}", e)))?;

    Ok(())
}

/// Replace a file's records atomically (write to temp, then rename)
pub fn write_records_atomic<T, P, I>(path: P, records: I) -> TrackerResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
    I: IntoIterator<Item = T>,
{
    let path = path.as_ref();
    ensure_parent(path)?;

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("txt.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| TrackerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    for record in records {
        writer.serialize(record)?;
    }

    let file = writer
        .into_inner()
        .map_err(|e| TrackerError::Storage(format!("Failed to flush data: {}", e)))?;
    file.sync_all()
        .map_err(|e| TrackerError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        TrackerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

fn ensure_parent(path: &Path) -> TrackerResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            TrackerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Row {
        name: String,
        value: i64,
    }

    fn row(name: &str, value: i64) -> Row {
        Row {
            name: name.to_string(),
            value,
        }
    }

    #[test]
    fn test_read_nonexistent_returns_empty() {
        let temp_dir = TempDir::new().unwrap();
        let rows: Vec<Row> = read_records(temp_dir.path().join("missing.txt")).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_append_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.txt");

        append_record(&path, &row("a", 1)).unwrap();
        append_record(&path, &row("b, with comma", 2)).unwrap();

        let rows: Vec<Row> = read_records(&path).unwrap();
        assert_eq!(rows, vec![row("a", 1), row("b, with comma", 2)]);
    }

    #[test]
    fn test_fields_read_back_as_written() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.txt");

        append_record(&path, &row("  padded name ", 1)).unwrap();

        let rows: Vec<Row> = read_records(&path).unwrap();
        assert_eq!(rows, vec![row("  padded name ", 1)]);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.txt");
        fs::write(&path, "a,1\n\nb,2\n\n").unwrap();

        let rows: Vec<Row> = read_records(&path).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.txt");
        fs::write(&path, "a,1\nb,not-a-number\n").unwrap();

        let err = read_records::<Row, _>(&path).unwrap_err();
        match err {
            TrackerError::InvalidRecord { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_atomic_write_replaces_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.txt");

        write_records_atomic(&path, vec![row("a", 1), row("b", 2)]).unwrap();
        write_records_atomic(&path, vec![row("c", 3)]).unwrap();

        let rows: Vec<Row> = read_records(&path).unwrap();
        assert_eq!(rows, vec![row("c", 3)]);
        assert!(!temp_dir.path().join("rows.txt.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("rows.txt");

        write_records_atomic(&path, vec![row("a", 1)]).unwrap();
        assert!(path.exists());
    }
}
