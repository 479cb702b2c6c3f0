//! Spending Report
//!
//! Category breakdown of a month's expenses with a comparison against the
//! month before.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use super::{ranked_shares, CategoryShare};
use crate::analytics::{compare_months, Delta, Direction, PeriodAggregator};
use crate::display::{format_bar, format_percentage, money, section};
use crate::models::{Money, Month, Snapshot, TransactionKind};

const TOP_CATEGORIES: usize = 3;
const CHART_WIDTH: usize = 20;

#[derive(Debug, Clone)]
pub struct SpendingReport {
    pub month: Month,
    /// Expense categories, largest first
    pub categories: Vec<CategoryShare>,
    pub total_spending: Money,
    /// Total divided by the days elapsed (current month) or all its days
    pub average_daily: Money,
    /// This month's spending against last month's
    pub comparison: Delta,
}

impl SpendingReport {
    /// Generate the report for `month`, using `today` to count elapsed days
    pub fn generate(snapshot: &Snapshot, month: Month, today: NaiveDate) -> Self {
        let aggregator = PeriodAggregator::new(&snapshot.transactions, month);
        let by_category = aggregator.total_by_category(TransactionKind::Expense);
        let total_spending = by_category.total();

        let days = if month.contains(today) {
            today.day()
        } else {
            month.days()
        };

        debug!(%month, categories = by_category.len(), "spending report generated");

        Self {
            month,
            categories: ranked_shares(&by_category),
            total_spending,
            average_daily: aggregator.average_daily(TransactionKind::Expense, days),
            comparison: compare_months(&snapshot.transactions, month).expense,
        }
    }

    pub fn top_categories(&self) -> &[CategoryShare] {
        let end = self.categories.len().min(TOP_CATEGORIES);
        &self.categories[..end]
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        if self.categories.is_empty() {
            output.push_str("No expenses found for this month.\n");
        } else {
            output.push_str(&section(&format!("Spending Breakdown for {}", self.month)));
            output.push_str(&format!("{:<15} {:>12} {:>10}\n", "Category", "Amount", "Share"));
            for share in &self.categories {
                output.push_str(&format!(
                    "{:<15} {:>12} {:>10}\n",
                    share.category,
                    money(share.amount, symbol),
                    format_percentage(share.percentage)
                ));
            }

            output.push('\n');
            output.push_str(&section("Spending by Category"));
            for share in &self.categories {
                output.push_str(&format!(
                    "{:<15} {} {:.1}%\n",
                    share.category,
                    format_bar(share.percentage, CHART_WIDTH),
                    share.percentage
                ));
            }

            output.push('\n');
            output.push_str(&section("Top 3 Spending Categories"));
            for (i, share) in self.top_categories().iter().enumerate() {
                output.push_str(&format!(
                    "{}. {}: {}\n",
                    i + 1,
                    share.category,
                    money(share.amount, symbol)
                ));
            }

            output.push_str(&format!(
                "\nAverage Daily Expense: {}\n",
                money(self.average_daily, symbol)
            ));
        }

        output.push('\n');
        output.push_str(&section("Monthly Comparison"));
        output.push_str(&format!(
            "Total spending this month: {}\n",
            money(self.comparison.current, symbol)
        ));
        output.push_str(&format!(
            "Total spending last month: {}\n",
            money(self.comparison.previous, symbol)
        ));
        output.push_str(&describe_change("Spending", &self.comparison, symbol));

        output
    }
}

/// "Spending is up by $5.00 compared to last month."
pub(crate) fn describe_change(label: &str, delta: &Delta, symbol: &str) -> String {
    match delta.direction {
        Direction::Same => format!("{} is the same as last month.\n", label),
        direction => format!(
            "{} is {} by {} compared to last month.\n",
            label,
            direction,
            money(delta.magnitude, symbol)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budgets, Goals, Transaction};

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn snapshot() -> Snapshot {
        let txns = vec![
            Transaction::expense(date(5, 1), "Food", "lunch", Money::from_cents(3000)),
            Transaction::expense(date(5, 2), "Bills", "power", Money::from_cents(6000)),
            Transaction::expense(date(5, 3), "Food", "dinner", Money::from_cents(1000)),
            Transaction::expense(date(4, 10), "Food", "", Money::from_cents(12000)),
            Transaction::income(date(5, 1), "Salary", "", Money::from_cents(50000)),
        ];
        Snapshot::new(txns, Budgets::new(), Goals::new())
    }

    #[test]
    fn test_breakdown() {
        let may = Month::new(2024, 5).unwrap();
        let report = SpendingReport::generate(&snapshot(), may, date(5, 10));

        assert_eq!(report.total_spending.cents(), 10000);
        assert_eq!(report.categories[0].category, "Bills");
        assert_eq!(report.categories[0].percentage, 60.0);
        assert_eq!(report.categories[1].amount.cents(), 4000);
        // 10000 over 10 elapsed days
        assert_eq!(report.average_daily.cents(), 1000);
        assert_eq!(report.comparison.direction, Direction::Down);
        assert_eq!(report.comparison.magnitude.cents(), 2000);
    }

    #[test]
    fn test_past_month_uses_all_days() {
        let april = Month::new(2024, 4).unwrap();
        let report = SpendingReport::generate(&snapshot(), april, date(5, 10));
        assert_eq!(report.average_daily.cents(), 400);
    }

    #[test]
    fn test_format_terminal() {
        let may = Month::new(2024, 5).unwrap();
        let text = SpendingReport::generate(&snapshot(), may, date(5, 10)).format_terminal("$");

        assert!(text.contains("Spending Breakdown for 2024-05"));
        assert!(text.contains("1. Bills: $60.00"));
        assert!(text.contains("Average Daily Expense: $10.00"));
        assert!(text.contains("Spending is down by $20.00 compared to last month."));
    }

    #[test]
    fn test_empty_month() {
        let june = Month::new(2024, 6).unwrap();
        let report = SpendingReport::generate(&snapshot(), june, date(6, 1));
        assert!(report.categories.is_empty());
        assert!(report.format_terminal("$").contains("No expenses found"));
    }
}
