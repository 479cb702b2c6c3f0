//! JSON Export functionality
//!
//! Exports every transaction, budget and goal with schema versioning.
//! Amounts are in minor units, as stored.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Budgets, Goals, Snapshot, Transaction};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full data export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    pub metadata: ExportMetadata,

    /// All transactions, in recording order
    pub transactions: Vec<Transaction>,

    /// Monthly budget per category
    pub budgets: Budgets,

    /// Savings target per goal
    pub goals: Goals,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub transaction_count: usize,

    /// Date range of transactions
    pub earliest_transaction: Option<String>,
    pub latest_transaction: Option<String>,
}

impl FullExport {
    /// Build an export from a loaded snapshot
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let transactions = &snapshot.transactions;

        let metadata = ExportMetadata {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transaction_count: transactions.len(),
            earliest_transaction: transactions
                .iter()
                .map(|t| t.date)
                .min()
                .map(|d| d.to_string()),
            latest_transaction: transactions
                .iter()
                .map(|t| t.date)
                .max()
                .map(|d| d.to_string()),
        };

        Self {
            metadata,
            transactions: transactions.clone(),
            budgets: snapshot.budgets.clone(),
            goals: snapshot.goals.clone(),
        }
    }

    /// True when there are no transactions, budgets or goals to export
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty() && self.budgets.is_empty() && self.goals.is_empty()
    }
}

/// Export the snapshot to pretty-printed JSON
pub fn export_full_json<W: Write + ?Sized>(
    snapshot: &Snapshot,
    writer: &mut W,
) -> TrackerResult<()> {
    let export = FullExport::from_snapshot(snapshot);

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}
