//! Savings Report

use crate::analytics::{savings_trend, MonthTotals, PeriodAggregator, TrendPoint};
use crate::display::{format_percentage, money, section};
use crate::models::{Month, Snapshot};

#[derive(Debug, Clone)]
pub struct SavingsReport {
    pub totals: MonthTotals,
    /// Savings for the month and the two before it, newest first
    pub trend: Vec<TrendPoint>,
}

impl SavingsReport {
    pub fn generate(snapshot: &Snapshot, month: Month) -> Self {
        Self {
            totals: PeriodAggregator::new(&snapshot.transactions, month).totals(),
            trend: savings_trend(&snapshot.transactions, month),
        }
    }

    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = section(&format!("Current Month Savings ({})", self.totals.month));
        output.push_str(&format!("Total Income:   {}\n", money(self.totals.income, symbol)));
        output.push_str(&format!("Total Expenses: {}\n", money(self.totals.expense, symbol)));
        output.push_str(&format!("Savings:        {}\n", money(self.totals.savings(), symbol)));
        output.push_str(&format!(
            "Savings Rate:   {}\n",
            format_percentage(self.totals.savings_rate())
        ));

        output.push('\n');
        output.push_str(&section("Savings Trend (Last 3 Months)"));
        for point in &self.trend {
            output.push_str(&format!("{}: {}\n", point.month, money(point.savings, symbol)));
        }

        output
    }
}
