//! Savings goal progress, measured against lifetime savings

use super::aggregator::lifetime_savings;
use crate::models::{Goals, Money, Transaction};

#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
    pub name: String,
    pub target: Money,
    /// Lifetime savings, shared by every goal
    pub saved: Money,
    /// `saved / target * 100`, uncapped; 0 when the target is 0
    pub percent: f64,
}

impl GoalProgress {
    /// Percent clamped to 0..=100 for progress bars
    pub fn display_percent(&self) -> f64 {
        self.percent.clamp(0.0, 100.0)
    }

    pub fn is_reached(&self) -> bool {
        self.target.is_positive() && self.saved >= self.target
    }
}

/// Progress for each goal, in goal map order
pub fn goals_progress(transactions: &[Transaction], goals: &Goals) -> Vec<GoalProgress> {
    let saved = lifetime_savings(transactions);
    goals
        .iter()
        .map(|(name, &target)| GoalProgress {
            name: name.clone(),
            target,
            saved,
            percent: saved.percent_of(target),
        })
        .collect()
}
