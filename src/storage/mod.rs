//! Storage layer for the finance tracker
//!
//! Flat comma-delimited files under the data directory, plus the audit log.
//! Reads always go back to disk: callers load a fresh [`Snapshot`] after any
//! change.

pub mod amounts;
pub mod file_io;
pub mod transactions;

pub use amounts::{BudgetRepository, GoalRepository};
pub use file_io::{append_record, read_records, write_records_atomic};
pub use transactions::TransactionRepository;

use serde::Serialize;
use tracing::debug;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::TrackerPaths;
use crate::error::TrackerResult;
use crate::models::Snapshot;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: TrackerPaths,
    pub transactions: TransactionRepository,
    pub budgets: BudgetRepository,
    pub goals: GoalRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance, creating the directories if needed
    pub fn new(paths: TrackerPaths) -> TrackerResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            goals: GoalRepository::new(paths.goals_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load transactions, budgets and goals in one go
    pub fn snapshot(&self) -> TrackerResult<Snapshot> {
        let snapshot = Snapshot::new(
            self.transactions.load()?,
            self.budgets.load()?,
            self.goals.load()?,
        );
        debug!(
            transactions = snapshot.transactions.len(),
            budgets = snapshot.budgets.len(),
            goals = snapshot.goals.len(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Log a create operation to the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity: &T,
    ) -> TrackerResult<()> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity))
    }

    /// Log an update operation to the audit log
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> TrackerResult<()> {
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            before,
            after,
            diff_summary,
        ))
    }

    /// Check if settings have been written for this data directory
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}
