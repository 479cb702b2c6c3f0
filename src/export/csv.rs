//! CSV Export functionality
//!
//! Exports transactions to a spreadsheet-friendly CSV file with a header row
//! and amounts in major units.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Transaction;

/// Column names written as the first row
pub const CSV_HEADER: [&str; 5] = ["Date", "Type", "Category", "Description", "Amount"];

/// Export transactions to CSV, returning the number of rows written
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> TrackerResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(CSV_HEADER)
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    for txn in transactions {
        csv_writer
            .write_record([
                txn.date.format("%Y-%m-%d").to_string(),
                txn.kind.to_string(),
                txn.category.clone(),
                txn.description.clone(),
                txn.amount.to_string(),
            ])
            .map_err(|e| TrackerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(transactions.len())
}
