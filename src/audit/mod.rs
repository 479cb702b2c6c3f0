//! Audit trail for data changes
//!
//! Every recorded transaction and every budget or goal that is set lands in
//! an append-only JSONL log.
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_tracker::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(EntityType::Goal, "Vacation", &amount))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
