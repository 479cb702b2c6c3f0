//! Reports module for the finance tracker
//!
//! Each report is built once from a [`Snapshot`](crate::models::Snapshot)
//! with `generate` and rendered with `format_terminal`.

pub mod health;
pub mod income;
pub mod monthly;
pub mod savings;
pub mod spending;

pub use health::HealthReport;
pub use income::IncomeReport;
pub use monthly::MonthlyReport;
pub use savings::SavingsReport;
pub use spending::SpendingReport;

use crate::analytics::CategoryTotals;
use crate::models::Money;

/// A category's slice of a total
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub amount: Money,
    /// Share of the total, 0 when the total is 0
    pub percentage: f64,
}

/// Category shares, largest first, ties in first-appearance order
pub(crate) fn ranked_shares(totals: &CategoryTotals) -> Vec<CategoryShare> {
    let total = totals.total();
    totals
        .ranked()
        .into_iter()
        .map(|c| CategoryShare {
            category: c.category.clone(),
            amount: c.amount,
            percentage: c.amount.percent_of(total),
        })
        .collect()
}
