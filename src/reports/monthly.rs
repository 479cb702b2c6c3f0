//! Monthly Report
//!
//! One-page summary of a month: income and expenses against the month
//! before, budget performance, the largest transactions and the spending
//! trend.

use tracing::debug;

use super::spending::describe_change;
use crate::analytics::{
    compare_months, evaluate_budgets, BudgetEvaluation, Direction, MonthComparison,
    PeriodAggregator,
};
use crate::display::{format_percentage, format_transaction_line, money, section};
use crate::models::{Month, Snapshot, Transaction};

#[derive(Debug, Clone)]
pub struct MonthlyReport {
    pub month: Month,
    pub comparison: MonthComparison,
    pub budgets: BudgetEvaluation,
    /// Largest transactions of the month, either kind
    pub top_transactions: Vec<Transaction>,
}

impl MonthlyReport {
    pub fn generate(snapshot: &Snapshot, month: Month, top_count: usize) -> Self {
        let top_transactions = PeriodAggregator::new(&snapshot.transactions, month)
            .top_transactions(top_count)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>();

        debug!(%month, top = top_transactions.len(), "monthly report generated");

        Self {
            month,
            comparison: compare_months(&snapshot.transactions, month),
            budgets: evaluate_budgets(&snapshot.transactions, &snapshot.budgets, month),
            top_transactions,
        }
    }

    /// One-line description of how spending moved since last month
    pub fn spending_trend(&self) -> &'static str {
        match self.comparison.expense.direction {
            Direction::Up => "Spending is trending up.",
            Direction::Down => "Spending is trending down.",
            Direction::Same => "Spending is flat compared to last month.",
        }
    }

    pub fn format_terminal(&self, symbol: &str) -> String {
        let current = &self.comparison.current;

        let mut output = section(&format!("Monthly Report for {}", self.month));
        output.push_str(&format!("Total Income:   {}\n", money(current.income, symbol)));
        output.push_str(&format!("Total Expenses: {}\n", money(current.expense, symbol)));
        output.push_str(&format!("Net Savings:    {}\n", money(current.savings(), symbol)));
        output.push_str(&format!(
            "Savings Rate:   {}\n",
            format_percentage(current.savings_rate())
        ));

        output.push('\n');
        output.push_str(&section("Income vs Last Month"));
        output.push_str(&describe_change("Income", &self.comparison.income, symbol));

        output.push('\n');
        output.push_str(&section("Expenses vs Last Month"));
        output.push_str(&describe_change("Spending", &self.comparison.expense, symbol));

        output.push('\n');
        output.push_str(&section("Budget Performance"));
        if self.budgets.is_empty() {
            output.push_str("No budgets set.\n");
        } else {
            for item in &self.budgets.categories {
                output.push_str(&format!(
                    "- {}: Spent {} of {}{}\n",
                    item.category,
                    money(item.spent, symbol),
                    money(item.budget, symbol),
                    if item.is_over_budget() { " (over)" } else { "" }
                ));
            }
        }

        output.push('\n');
        output.push_str(&section("Top Transactions"));
        if self.top_transactions.is_empty() {
            output.push_str("No transactions this month.\n");
        } else {
            for txn in &self.top_transactions {
                output.push_str(&format_transaction_line(txn, symbol));
                output.push('\n');
            }
        }

        output.push('\n');
        output.push_str(&section("Trend"));
        output.push_str(self.spending_trend());
        output.push('\n');

        output
    }
}
