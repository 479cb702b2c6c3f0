//! Budget table and summary formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::{format_bar, format_percentage, money, section};
use crate::analytics::BudgetEvaluation;

const BAR_WIDTH: usize = 20;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Utilization")]
    utilization: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Budget vs spending, one row per budgeted category
pub fn format_budget_table(evaluation: &BudgetEvaluation, symbol: &str) -> String {
    if evaluation.is_empty() {
        return "No budgets set. Please set a budget first.\n".to_string();
    }

    let rows = evaluation.categories.iter().map(|c| BudgetRow {
        category: c.category.clone(),
        budget: money(c.budget, symbol),
        spent: money(c.spent, symbol),
        remaining: money(c.remaining, symbol),
        utilization: format!(
            "{} {}",
            format_bar(c.utilization, BAR_WIDTH),
            format_percentage(c.utilization)
        ),
        status: c.status.to_string(),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("Budget vs Spending ({})\n{}\n", evaluation.month, table)
}

/// Totals and the list of categories over budget
pub fn format_budget_summary(evaluation: &BudgetEvaluation, symbol: &str) -> String {
    if evaluation.is_empty() {
        return "No budgets set. Please set a budget first.\n".to_string();
    }

    let mut output = section(&format!("Budget Summary ({})", evaluation.month));
    output.push_str(&format!(
        "Total Monthly Budget: {}\n",
        money(evaluation.total_budget, symbol)
    ));
    output.push_str(&format!(
        "Total Spent:          {}\n",
        money(evaluation.total_spent, symbol)
    ));
    output.push_str(&format!(
        "Total Remaining:      {}\n",
        money(evaluation.total_remaining, symbol)
    ));
    output.push_str(&format!(
        "Overall Utilization:  {}\n",
        format_percentage(evaluation.overall_utilization)
    ));

    if !evaluation.over_budget.is_empty() {
        output.push_str("\nCategories Over Budget:\n");
        for category in &evaluation.over_budget {
            output.push_str(&format!("- {}\n", category));
        }
        output.push_str("\nReview your spending in over-budget categories.\n");
    }

    output
}
