//! Spending alerts and the daily financial check

use std::fmt;

use chrono::{Datelike, NaiveDate};

use super::aggregator::{total_on_day, PeriodAggregator};
use super::budget::evaluate_budgets;
use crate::models::{Budgets, Money, Month, Transaction, TransactionKind};

/// Budget utilization above this raises a warning
pub const BUDGET_ALERT_PERCENT: f64 = 80.0;

/// An expense above this share of the month's income is large
pub const LARGE_TRANSACTION_PERCENT: i128 = 20;

/// Rotating tips for the daily check
pub const QUICK_TIPS: [&str; 6] = [
    "Create a budget for your top spending categories.",
    "Review your subscriptions for potential savings.",
    "Try a 'no-spend' weekend to boost your savings.",
    "Use a shopping list to avoid impulse purchases.",
    "Automate your savings by setting up recurring transfers.",
    "Cook at home more often to save on food expenses.",
];

#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// A budgeted category is above 80% utilization
    BudgetWarning { category: String, utilization: f64 },
    /// A single expense above 20% of the month's income
    LargeTransaction {
        date: NaiveDate,
        category: String,
        description: String,
        amount: Money,
    },
    /// Informational: where most of the month's money went
    TopSpendingCategory { category: String, amount: Money },
}

impl Alert {
    /// True for alerts that need attention, false for informational ones
    pub fn is_warning(&self) -> bool {
        !matches!(self, Self::TopSpendingCategory { .. })
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BudgetWarning {
                category,
                utilization,
            } => write!(
                f,
                "Budget Warning: {} category is at {:.2}% of its budget.",
                category, utilization
            ),
            Self::LargeTransaction {
                amount,
                description,
                ..
            } => write!(
                f,
                "Large Transaction: A transaction of {} for {} was detected.",
                amount, description
            ),
            Self::TopSpendingCategory { category, .. } => write!(
                f,
                "Top Spending Category: Your highest spending this month is in the {} category.",
                category
            ),
        }
    }
}

/// Budgeted categories above 80% utilization this month, in budget map order
pub fn budget_warnings(transactions: &[Transaction], budgets: &Budgets, month: Month) -> Vec<Alert> {
    evaluate_budgets(transactions, budgets, month)
        .categories
        .into_iter()
        .filter(|c| c.utilization > BUDGET_ALERT_PERCENT)
        .map(|c| Alert::BudgetWarning {
            category: c.category,
            utilization: c.utilization,
        })
        .collect()
}

/// Expenses larger than 20% of `month`'s income
///
/// Every recorded expense is checked, not only the month's own. Skipped
/// entirely when the month has no income.
pub fn large_transactions(transactions: &[Transaction], month: Month) -> Vec<Alert> {
    let income = PeriodAggregator::new(transactions, month).total_by_kind(TransactionKind::Income);
    if !income.is_positive() {
        return Vec::new();
    }

    let threshold = income.cents() as i128 * LARGE_TRANSACTION_PERCENT;
    transactions
        .iter()
        .filter(|t| t.is_expense() && t.amount.cents() as i128 * 100 > threshold)
        .map(|t| Alert::LargeTransaction {
            date: t.date,
            category: t.category.clone(),
            description: t.description.clone(),
            amount: t.amount,
        })
        .collect()
}

/// Budget warnings, large transactions, then the top spending category
pub fn spending_alerts(transactions: &[Transaction], budgets: &Budgets, month: Month) -> Vec<Alert> {
    let mut alerts = budget_warnings(transactions, budgets, month);
    alerts.extend(large_transactions(transactions, month));

    let by_category =
        PeriodAggregator::new(transactions, month).total_by_category(TransactionKind::Expense);
    if let Some(top) = by_category.largest() {
        alerts.push(Alert::TopSpendingCategory {
            category: top.category.clone(),
            amount: top.amount,
        });
    }
    alerts
}

/// Snapshot of one day against the monthly budgets
#[derive(Debug, Clone, PartialEq)]
pub struct DailyCheck {
    pub date: NaiveDate,
    pub spent_today: Money,
    /// Total budget spread evenly over the days of the month
    pub daily_budget: Money,
    /// `daily_budget - spent_today`, negative when over
    pub remaining: Money,
    pub alerts: Vec<Alert>,
    pub tip: &'static str,
}

/// Tip for a given day; rotates through [`QUICK_TIPS`] by day of year
pub fn tip_for(date: NaiveDate) -> &'static str {
    QUICK_TIPS[date.ordinal0() as usize % QUICK_TIPS.len()]
}

pub fn daily_check(transactions: &[Transaction], budgets: &Budgets, today: NaiveDate) -> DailyCheck {
    let month = Month::containing(today);
    let spent_today = total_on_day(transactions, TransactionKind::Expense, today);

    let total_budget: Money = budgets.values().sum();
    let daily_budget = if total_budget.is_positive() {
        total_budget.fraction(1, i64::from(month.days()))
    } else {
        Money::zero()
    };

    let mut alerts = budget_warnings(transactions, budgets, month);
    alerts.extend(large_transactions(transactions, month));

    DailyCheck {
        date: today,
        spent_today,
        daily_budget,
        remaining: daily_budget - spent_today,
        alerts,
        tip: tip_for(today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn may() -> Month {
        Month::new(2024, 5).unwrap()
    }

    fn expense(d: NaiveDate, category: &str, description: &str, cents: i64) -> Transaction {
        Transaction::expense(d, category, description, Money::from_cents(cents))
    }

    fn salary(d: NaiveDate, cents: i64) -> Transaction {
        Transaction::income(d, "Salary", "pay", Money::from_cents(cents))
    }

    fn budgets(entries: &[(&str, i64)]) -> Budgets {
        entries
            .iter()
            .map(|(c, a)| (c.to_string(), Money::from_cents(*a)))
            .collect()
    }

    #[test]
    fn test_large_transaction_fires() {
        let txns = vec![
            salary(date(5, 1), 10000),
            expense(date(5, 2), "Shopping", "laptop", 9000),
            expense(date(5, 3), "Food", "lunch", 2000),
        ];
        let alerts = large_transactions(&txns, may());

        assert_eq!(alerts.len(), 1);
        assert_eq!(
            alerts[0].to_string(),
            "Large Transaction: A transaction of 90.00 for laptop was detected."
        );
    }

    #[test]
    fn test_large_transaction_skipped_without_income() {
        let txns = vec![expense(date(5, 2), "Shopping", "laptop", 9000)];
        assert!(large_transactions(&txns, may()).is_empty());
    }

    #[test]
    fn test_large_transaction_checks_every_expense() {
        let txns = vec![
            salary(date(5, 1), 10000),
            expense(date(3, 2), "Shopping", "old", 2001),
        ];
        assert_eq!(large_transactions(&txns, may()).len(), 1);
    }

    #[test]
    fn test_budget_warning_threshold_is_strict() {
        let food = budgets(&[("Food", 1000)]);
        let at = vec![expense(date(5, 2), "Food", "", 800)];
        assert!(budget_warnings(&at, &food, may()).is_empty());

        let above = vec![expense(date(5, 2), "Food", "", 801)];
        let alerts = budget_warnings(&above, &food, may());
        assert_eq!(alerts.len(), 1);
        assert_eq!(
            alerts[0].to_string(),
            "Budget Warning: Food category is at 80.10% of its budget."
        );
    }

    #[test]
    fn test_spending_alerts_order() {
        let txns = vec![
            salary(date(5, 1), 10000),
            expense(date(5, 2), "Food", "groceries", 900),
            expense(date(5, 3), "Bills", "rent", 3000),
        ];
        let alerts = spending_alerts(&txns, &budgets(&[("Food", 1000)]), may());

        assert!(matches!(alerts[0], Alert::BudgetWarning { .. }));
        assert!(matches!(alerts[1], Alert::LargeTransaction { .. }));
        assert_eq!(
            alerts[2],
            Alert::TopSpendingCategory {
                category: "Bills".into(),
                amount: Money::from_cents(3000),
            }
        );
        assert!(!alerts[2].is_warning());
    }

    #[test]
    fn test_spending_alerts_empty() {
        assert!(spending_alerts(&[], &Budgets::new(), may()).is_empty());
    }

    #[test]
    fn test_daily_check() {
        let txns = vec![
            expense(date(5, 20), "Food", "lunch", 700),
            expense(date(5, 20), "Transport", "bus", 300),
            expense(date(5, 19), "Food", "dinner", 5000),
        ];
        let check = daily_check(&txns, &budgets(&[("Food", 31000)]), date(5, 20));

        assert_eq!(check.spent_today.cents(), 1000);
        assert_eq!(check.daily_budget.cents(), 1000);
        assert_eq!(check.remaining, Money::zero());
        assert!(check.alerts.is_empty());
        assert!(QUICK_TIPS.contains(&check.tip));
    }

    #[test]
    fn test_daily_check_without_budgets() {
        let txns = vec![expense(date(2, 29), "Food", "", 250)];
        let check = daily_check(&txns, &Budgets::new(), date(2, 29));
        assert_eq!(check.daily_budget, Money::zero());
        assert_eq!(check.remaining.cents(), -250);
    }

    #[test]
    fn test_tip_is_deterministic() {
        assert_eq!(tip_for(date(1, 1)), QUICK_TIPS[0]);
        assert_eq!(tip_for(date(1, 7)), QUICK_TIPS[0]);
        assert_eq!(tip_for(date(1, 2)), tip_for(date(1, 2)));
    }
}
