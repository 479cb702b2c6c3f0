//! Service layer for the finance tracker
//!
//! Validation and audit logging on top of the storage layer. All writes go
//! through here.

pub mod budget;
pub mod goal;
pub mod transaction;

pub use budget::{BudgetChange, BudgetService};
pub use goal::GoalService;
pub use transaction::{Balance, RecordTransactionInput, TransactionFilter, TransactionService};
