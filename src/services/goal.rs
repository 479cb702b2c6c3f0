//! Savings goal service

use tracing::info;

use crate::audit::EntityType;
use crate::error::{TrackerError, TrackerResult};
use crate::models::Money;
use crate::storage::Storage;

pub struct GoalService<'a> {
    storage: &'a Storage,
}

impl<'a> GoalService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create or overwrite a goal, returning the target it replaced
    pub fn set(&self, name: &str, amount: Money) -> TrackerResult<Option<Money>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrackerError::Validation("Goal name cannot be empty".into()));
        }
        if name.contains(|c: char| c == '\n' || c == '\r') {
            return Err(TrackerError::Validation(
                "Goal name must be a single line".into(),
            ));
        }
        if !amount.is_positive() {
            return Err(TrackerError::Validation(
                "Amount must be a positive number.".into(),
            ));
        }

        let previous = self.storage.goals.set(name, amount)?;
        match previous {
            Some(before) => self.storage.log_update(
                EntityType::Goal,
                name,
                &before,
                &amount,
                Some(format!("amount: {} -> {}", before, amount)),
            )?,
            None => self.storage.log_create(EntityType::Goal, name, &amount)?,
        }

        info!(goal = name, amount = amount.cents(), "goal set");
        Ok(previous)
    }
}
