//! Export module for the finance tracker
//!
//! - CSV: transactions only, spreadsheet-compatible
//! - JSON: transactions, budgets and goals, machine-readable
//! - YAML: the JSON document in human-readable form

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_transactions_csv, CSV_HEADER};
pub use json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
