//! Core data models for the finance tracker
//!
//! Transactions, the budget and goal maps, money amounts and calendar months.

pub mod money;
pub mod period;
pub mod snapshot;
pub mod transaction;

pub use money::{Money, MoneyParseError};
pub use period::{Month, MonthParseError};
pub use snapshot::{Budgets, Goals, Snapshot};
pub use transaction::{
    Transaction, TransactionKind, TransactionValidationError, EXPENSE_CATEGORIES, INCOME_SOURCES,
};
