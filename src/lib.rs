//! Finance Tracker - terminal personal finance tracking
//!
//! This library records income and expense transactions in flat files,
//! keeps monthly budgets per category and savings goals, and derives
//! reports, a financial health score and rule-based recommendations from
//! them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, money, months, snapshot)
//! - `storage`: Flat file storage layer
//! - `services`: Validation and writes
//! - `audit`: Audit logging system
//! - `analytics`: Aggregation, comparison, budgets, health and advice
//! - `reports`: Report structs built from a snapshot
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers for the `fintrack` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_tracker::analytics::health_score;
//! use finance_tracker::config::paths::TrackerPaths;
//! use finance_tracker::models::Month;
//! use finance_tracker::storage::Storage;
//!
//! let storage = Storage::new(TrackerPaths::new()?)?;
//! let snapshot = storage.snapshot()?;
//! let score = health_score(&snapshot.transactions, &snapshot.budgets, Month::current());
//! println!("{}/100", score.total());
//! ```

pub mod analytics;
pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
