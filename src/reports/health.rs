//! Financial Health Report

use crate::analytics::health::{
    BUDGET_ADHERENCE_MAX, DEBT_MANAGEMENT_MAX, INCOME_VS_EXPENSES_MAX, SAVINGS_RATE_MAX,
};
use crate::analytics::{health_score, HealthScore};
use crate::display::{format_bar, section};
use crate::models::{Month, Snapshot};

const SCORE_BAR_WIDTH: usize = 20;

#[derive(Debug, Clone)]
pub struct HealthReport {
    pub score: HealthScore,
}

impl HealthReport {
    pub fn generate(snapshot: &Snapshot, month: Month) -> Self {
        Self {
            score: health_score(&snapshot.transactions, &snapshot.budgets, month),
        }
    }

    pub fn format_terminal(&self) -> String {
        let score = &self.score;
        let total = score.total();

        let mut output = section(&format!("Financial Health Score ({})", score.month));
        output.push_str(&format!(
            "Overall Score: {}/100 {} ({})\n\n",
            total,
            format_bar(f64::from(total), SCORE_BAR_WIDTH),
            score.grade()
        ));

        output.push_str("Breakdown:\n");
        output.push_str(&format!(
            "- Savings Rate: {}/{}\n",
            score.savings_rate_score, SAVINGS_RATE_MAX
        ));
        output.push_str(&format!(
            "- Budget Adherence: {}/{}\n",
            score.budget_adherence_score, BUDGET_ADHERENCE_MAX
        ));
        output.push_str(&format!(
            "- Income vs Expenses: {}/{}\n",
            score.income_vs_expenses_score, INCOME_VS_EXPENSES_MAX
        ));
        output.push_str(&format!(
            "- Debt Management: {}/{}\n",
            score.debt_management_score, DEBT_MANAGEMENT_MAX
        ));

        let tips = score.tips();
        if !tips.is_empty() {
            output.push_str("\nRecommendations:\n");
            for tip in tips {
                output.push_str(&format!("- {}\n", tip));
            }
        }

        output
    }
}
