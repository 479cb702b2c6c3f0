//! YAML Export functionality
//!
//! The same document as the JSON export, in a human-readable form.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::export::json::FullExport;
use crate::models::Snapshot;

/// Export the snapshot to YAML with a short comment header
pub fn export_full_yaml<W: Write + ?Sized>(
    snapshot: &Snapshot,
    writer: &mut W,
) -> TrackerResult<()> {
    let export = FullExport::from_snapshot(snapshot);

    writeln!(writer, "# Finance Tracker Data Export")
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.metadata.exported_at)
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.metadata.app_version)
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budgets, Goals, Money, Transaction};
    use chrono::NaiveDate;

    #[test]
    fn test_yaml_export() {
        let txns = vec![Transaction::expense(
            NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
            "Transport",
            "bus pass",
            Money::from_cents(4200),
        )];
        let mut budgets = Budgets::new();
        budgets.insert("Transport".to_string(), Money::from_cents(6000));
        let snapshot = Snapshot::new(txns, budgets, Goals::new());

        let mut output = Vec::new();
        export_full_yaml(&snapshot, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with("# Finance Tracker Data Export\n"));
        assert!(text.contains("bus pass"));

        let body: String = text
            .lines()
            .filter(|line| !line.starts_with('#'))
            .collect::<Vec<_>>()
            .join("\n");
        let parsed: FullExport = serde_yaml::from_str(&body).unwrap();
        assert_eq!(parsed.transactions, snapshot.transactions);
        assert_eq!(parsed.budgets["Transport"].cents(), 6000);
    }
}
