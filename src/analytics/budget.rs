//! Budget evaluation
//!
//! Joins the budget map against the month's spending per category.

use std::fmt;

use super::aggregator::PeriodAggregator;
use crate::models::{Budgets, Money, Month, Transaction};

/// Utilization below this is `Ok`
pub const WARNING_THRESHOLD_PERCENT: f64 = 70.0;

/// Utilization above this is `Over`
pub const OVER_THRESHOLD_PERCENT: f64 = 100.0;

/// Utilization band of a budgeted category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// Under 70%
    Ok,
    /// 70% to 100% inclusive
    Warning,
    /// Over 100%
    Over,
}

impl BudgetStatus {
    pub fn from_utilization(utilization: f64) -> Self {
        if utilization < WARNING_THRESHOLD_PERCENT {
            Self::Ok
        } else if utilization <= OVER_THRESHOLD_PERCENT {
            Self::Warning
        } else {
            Self::Over
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Warning => write!(f, "Warning"),
            Self::Over => write!(f, "Over"),
        }
    }
}

/// One budgeted category for a month
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBudget {
    /// Category name
    pub category: String,
    /// Monthly limit
    pub budget: Money,
    /// Expenses recorded in the month
    pub spent: Money,
    /// `budget - spent`, negative when overspent
    pub remaining: Money,
    /// `spent / budget * 100`, 0 when the budget is 0
    pub utilization: f64,
    pub status: BudgetStatus,
}

impl CategoryBudget {
    /// Strict amount comparison, independent of `status`
    pub fn is_over_budget(&self) -> bool {
        self.spent > self.budget
    }

    /// How far spending exceeds the limit, zero when within it
    pub fn overage(&self) -> Money {
        if self.is_over_budget() {
            self.spent - self.budget
        } else {
            Money::zero()
        }
    }
}

/// All budgets evaluated for one month
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetEvaluation {
    pub month: Month,
    /// One row per budget entry, in budget map order
    pub categories: Vec<CategoryBudget>,
    pub total_budget: Money,
    /// Spending across budgeted categories only
    pub total_spent: Money,
    pub total_remaining: Money,
    pub overall_utilization: f64,
    /// Categories where spent > budget
    pub over_budget: Vec<String>,
}

impl BudgetEvaluation {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, category: &str) -> Option<&CategoryBudget> {
        self.categories.iter().find(|c| c.category == category)
    }
}

/// Evaluate every budget against the month's spending
pub fn evaluate_budgets(
    transactions: &[Transaction],
    budgets: &Budgets,
    month: Month,
) -> BudgetEvaluation {
    let aggregator = PeriodAggregator::new(transactions, month);

    let categories: Vec<CategoryBudget> = budgets
        .iter()
        .map(|(category, &budget)| {
            let spent = aggregator.spent_in(category);
            let utilization = spent.percent_of(budget);
            CategoryBudget {
                category: category.clone(),
                budget,
                spent,
                remaining: budget - spent,
                utilization,
                status: BudgetStatus::from_utilization(utilization),
            }
        })
        .collect();

    let total_budget: Money = categories.iter().map(|c| c.budget).sum();
    let total_spent: Money = categories.iter().map(|c| c.spent).sum();
    let over_budget = categories
        .iter()
        .filter(|c| c.is_over_budget())
        .map(|c| c.category.clone())
        .collect();

    BudgetEvaluation {
        month,
        categories,
        total_budget,
        total_spent,
        total_remaining: total_budget - total_spent,
        overall_utilization: total_spent.percent_of(total_budget),
        over_budget,
    }
}
