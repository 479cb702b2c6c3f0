//! Budget service
//!
//! Setting a budget validates the category and amount, overwrites any
//! existing limit and records the change in the audit log.

use tracing::info;

use crate::audit::EntityType;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, TransactionKind, EXPENSE_CATEGORIES};
use crate::storage::Storage;

/// Outcome of setting a budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetChange {
    pub category: String,
    pub amount: Money,
    pub previous: Option<Money>,
}

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set the monthly limit for an expense category
    pub fn set(&self, category: &str, amount: Money) -> TrackerResult<BudgetChange> {
        let category = TransactionKind::Expense
            .canonical_category(category)
            .ok_or_else(|| {
                TrackerError::Validation(format!(
                    "Unknown budget category '{}'. Choose one of: {}",
                    category.trim(),
                    EXPENSE_CATEGORIES.join(", ")
                ))
            })?;

        if !amount.is_positive() {
            return Err(TrackerError::Validation(
                "Amount must be a positive number.".into(),
            ));
        }

        let previous = self.storage.budgets.set(category, amount)?;
        match previous {
            Some(before) => self.storage.log_update(
                EntityType::Budget,
                category,
                &before,
                &amount,
                Some(format!("amount: {} -> {}", before, amount)),
            )?,
            None => self
                .storage
                .log_create(EntityType::Budget, category, &amount)?,
        }

        info!(category, amount = amount.cents(), "budget set");
        Ok(BudgetChange {
            category: category.to_string(),
            amount,
            previous,
        })
    }
}
