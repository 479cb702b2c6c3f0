//! Income Report

use chrono::NaiveDate;

use super::spending::describe_change;
use super::{ranked_shares, CategoryShare};
use crate::analytics::{
    compare_months, income_stability, Delta, IncomeStability, PeriodAggregator,
};
use crate::display::{format_percentage, money, section};
use crate::models::{Money, Month, Snapshot, TransactionKind};

#[derive(Debug, Clone)]
pub struct IncomeReport {
    pub month: Month,
    /// Income sources, largest first
    pub sources: Vec<CategoryShare>,
    pub total_income: Money,
    pub comparison: Delta,
    /// Regularity over the 90 days before `today`
    pub stability: IncomeStability,
}

impl IncomeReport {
    pub fn generate(snapshot: &Snapshot, month: Month, today: NaiveDate) -> Self {
        let by_source = PeriodAggregator::new(&snapshot.transactions, month)
            .total_by_category(TransactionKind::Income);

        Self {
            month,
            total_income: by_source.total(),
            sources: ranked_shares(&by_source),
            comparison: compare_months(&snapshot.transactions, month).income,
            stability: income_stability(&snapshot.transactions, today),
        }
    }

    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        if self.sources.is_empty() {
            output.push_str("No income found for this month.\n");
        } else {
            output.push_str(&section(&format!("Income by Source for {}", self.month)));
            output.push_str(&format!("{:<15} {:>12} {:>10}\n", "Source", "Amount", "Share"));
            for share in &self.sources {
                output.push_str(&format!(
                    "{:<15} {:>12} {:>10}\n",
                    share.category,
                    money(share.amount, symbol),
                    format_percentage(share.percentage)
                ));
            }
        }

        output.push('\n');
        output.push_str(&section("Monthly Comparison"));
        output.push_str(&format!(
            "Total income this month: {}\n",
            money(self.comparison.current, symbol)
        ));
        output.push_str(&format!(
            "Total income last month: {}\n",
            money(self.comparison.previous, symbol)
        ));
        output.push_str(&describe_change("Income", &self.comparison, symbol));

        output.push('\n');
        output.push_str(&section("Income Stability"));
        match self.stability {
            IncomeStability::Stable => output.push_str("Your income seems stable.\n"),
            IncomeStability::Irregular => output.push_str(
                "Your income seems irregular, or there is not enough recent income to tell.\n",
            ),
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::Direction;
    use crate::models::{Budgets, Goals, Transaction};

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn snapshot() -> Snapshot {
        let txns = vec![
            Transaction::income(date(4, 1), "Salary", "", Money::from_cents(100000)),
            Transaction::income(date(5, 1), "Salary", "", Money::from_cents(100000)),
            Transaction::income(date(5, 12), "Freelance", "", Money::from_cents(25000)),
            Transaction::expense(date(5, 2), "Food", "", Money::from_cents(999)),
        ];
        Snapshot::new(txns, Budgets::new(), Goals::new())
    }

    #[test]
    fn test_sources_and_comparison() {
        let may = Month::new(2024, 5).unwrap();
        let report = IncomeReport::generate(&snapshot(), may, date(5, 20));

        assert_eq!(report.total_income.cents(), 125000);
        assert_eq!(report.sources[0].category, "Salary");
        assert_eq!(report.sources[0].percentage, 80.0);
        assert_eq!(report.sources[1].percentage, 20.0);
        assert_eq!(report.comparison.direction, Direction::Up);
        // 100000 and 125000 against a mean of 112500: within 30%
        assert_eq!(report.stability, IncomeStability::Stable);
    }

    #[test]
    fn test_format_terminal() {
        let may = Month::new(2024, 5).unwrap();
        let text = IncomeReport::generate(&snapshot(), may, date(5, 20)).format_terminal("$");
        assert!(text.contains("Income by Source for 2024-05"));
        assert!(text.contains("Income is up by $250.00 compared to last month."));
        assert!(text.contains("Your income seems stable."));
    }

    #[test]
    fn test_no_income_is_irregular() {
        let snapshot = Snapshot::default();
        let may = Month::new(2024, 5).unwrap();
        let report = IncomeReport::generate(&snapshot, may, date(5, 20));
        assert_eq!(report.stability, IncomeStability::Irregular);
        assert!(report.format_terminal("$").contains("No income found"));
    }
}
