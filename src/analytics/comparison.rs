//! Month-over-month comparison, savings trend and income stability

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Duration, NaiveDate};

use super::aggregator::{MonthTotals, PeriodAggregator};
use crate::models::{Money, Month, Transaction};

/// Number of months in the savings trend, current month included
pub const SAVINGS_TREND_MONTHS: usize = 3;

/// Trailing window for the income stability check
pub const STABILITY_WINDOW_DAYS: i64 = 90;

/// Fewer distinct income months than this is not enough data
pub const STABILITY_MIN_MONTHS: usize = 2;

/// A month deviating from the mean by more than this share is irregular
pub const STABILITY_TOLERANCE_PERCENT: i128 = 30;

/// Which way a figure moved. Neutral: spending going up is just `Up`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Same,
}

impl Direction {
    pub fn between(current: Money, previous: Money) -> Self {
        if current > previous {
            Self::Up
        } else if current < previous {
            Self::Down
        } else {
            Self::Same
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
            Self::Same => write!(f, "the same"),
        }
    }
}

/// Change of one figure between two months
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delta {
    pub current: Money,
    pub previous: Money,
    /// `current - previous`
    pub change: Money,
    /// Absolute size of the change
    pub magnitude: Money,
    pub direction: Direction,
}

impl Delta {
    pub fn new(current: Money, previous: Money) -> Self {
        let change = current - previous;
        Self {
            current,
            previous,
            change,
            magnitude: change.abs(),
            direction: Direction::between(current, previous),
        }
    }
}

/// A month against the one before it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthComparison {
    pub current: MonthTotals,
    pub previous: MonthTotals,
    pub income: Delta,
    pub expense: Delta,
    pub savings: Delta,
}

/// Compare `month` with the calendar month before it
pub fn compare_months(transactions: &[Transaction], month: Month) -> MonthComparison {
    let current = PeriodAggregator::new(transactions, month).totals();
    let previous = PeriodAggregator::new(transactions, month.prev()).totals();

    MonthComparison {
        current,
        previous,
        income: Delta::new(current.income, previous.income),
        expense: Delta::new(current.expense, previous.expense),
        savings: Delta::new(current.savings(), previous.savings()),
    }
}

/// Savings for one month of the trend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendPoint {
    pub month: Month,
    pub savings: Money,
}

/// Savings for `month` and the two months before it, newest first
///
/// Always exactly [`SAVINGS_TREND_MONTHS`] entries; empty months report zero.
pub fn savings_trend(transactions: &[Transaction], month: Month) -> Vec<TrendPoint> {
    month
        .trailing(SAVINGS_TREND_MONTHS)
        .into_iter()
        .map(|m| TrendPoint {
            month: m,
            savings: PeriodAggregator::new(transactions, m).totals().savings(),
        })
        .collect()
}

/// Regularity of recent income
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncomeStability {
    Stable,
    Irregular,
}

impl IncomeStability {
    pub fn is_irregular(&self) -> bool {
        matches!(self, Self::Irregular)
    }
}

impl fmt::Display for IncomeStability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stable => write!(f, "Stable"),
            Self::Irregular => write!(f, "Irregular"),
        }
    }
}

/// Classify income over the 90 days before `today`
///
/// Income dated after `today - 90 days` is totalled per month. Fewer than two
/// months is `Irregular` (not enough data). Otherwise any month more than 30%
/// away from the mean monthly total makes it `Irregular`.
pub fn income_stability(transactions: &[Transaction], today: NaiveDate) -> IncomeStability {
    let cutoff = today - Duration::days(STABILITY_WINDOW_DAYS);

    let mut by_month: BTreeMap<Month, i128> = BTreeMap::new();
    for txn in transactions
        .iter()
        .filter(|t| t.is_income() && t.date > cutoff)
    {
        *by_month.entry(Month::containing(txn.date)).or_default() += txn.amount.cents() as i128;
    }

    if by_month.len() < STABILITY_MIN_MONTHS {
        return IncomeStability::Irregular;
    }

    // |total - sum/n| > 30% * sum/n, scaled by n and 100 to stay in integers
    let n = by_month.len() as i128;
    let sum: i128 = by_month.values().sum();
    if sum <= 0 {
        return IncomeStability::Irregular;
    }

    let irregular = by_month
        .values()
        .any(|total| 100 * (total * n - sum).abs() > STABILITY_TOLERANCE_PERCENT * sum);

    if irregular {
        IncomeStability::Irregular
    } else {
        IncomeStability::Stable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn salary(d: NaiveDate, cents: i64) -> Transaction {
        Transaction::income(d, "Salary", "pay", Money::from_cents(cents))
    }

    fn spend(d: NaiveDate, cents: i64) -> Transaction {
        Transaction::expense(d, "Food", "", Money::from_cents(cents))
    }

    #[test]
    fn test_direction() {
        let a = Money::from_cents(200);
        let b = Money::from_cents(100);
        assert_eq!(Direction::between(a, b), Direction::Up);
        assert_eq!(Direction::between(b, a), Direction::Down);
        assert_eq!(Direction::between(a, a), Direction::Same);
    }

    #[test]
    fn test_compare_months() {
        let txns = vec![
            salary(date(2024, 5, 1), 10000),
            spend(date(2024, 5, 3), 4000),
            salary(date(2024, 4, 1), 12000),
            spend(date(2024, 4, 3), 3000),
        ];
        let cmp = compare_months(&txns, Month::new(2024, 5).unwrap());

        assert_eq!(cmp.previous.month.to_string(), "2024-04");
        assert_eq!(cmp.income.change.cents(), -2000);
        assert_eq!(cmp.income.magnitude.cents(), 2000);
        assert_eq!(cmp.income.direction, Direction::Down);
        assert_eq!(cmp.expense.direction, Direction::Up);
        assert_eq!(cmp.savings.current.cents(), 6000);
        assert_eq!(cmp.savings.previous.cents(), 9000);
    }

    #[test]
    fn test_compare_january_against_december() {
        let txns = vec![spend(date(2023, 12, 24), 700)];
        let cmp = compare_months(&txns, Month::new(2024, 1).unwrap());
        assert_eq!(cmp.expense.previous.cents(), 700);
        assert_eq!(cmp.expense.current, Money::zero());
        assert_eq!(cmp.expense.direction, Direction::Down);
    }

    #[test]
    fn test_savings_trend_has_three_entries_with_zeros() {
        let txns = vec![salary(date(2024, 5, 1), 10000), spend(date(2024, 3, 2), 500)];
        let trend = savings_trend(&txns, Month::new(2024, 5).unwrap());

        assert_eq!(trend.len(), SAVINGS_TREND_MONTHS);
        assert_eq!(trend[0].month.to_string(), "2024-05");
        assert_eq!(trend[0].savings.cents(), 10000);
        assert_eq!(trend[1].savings, Money::zero());
        assert_eq!(trend[2].month.to_string(), "2024-03");
        assert_eq!(trend[2].savings.cents(), -500);
    }

    #[test]
    fn test_stability_needs_two_months() {
        let today = date(2024, 5, 20);
        assert_eq!(income_stability(&[], today), IncomeStability::Irregular);

        let one_month = vec![salary(date(2024, 5, 1), 10000), salary(date(2024, 5, 15), 10000)];
        assert_eq!(income_stability(&one_month, today), IncomeStability::Irregular);
    }

    #[test]
    fn test_stable_income() {
        let today = date(2024, 5, 20);
        let txns = vec![
            salary(date(2024, 3, 1), 10000),
            salary(date(2024, 4, 1), 11000),
            salary(date(2024, 5, 1), 9500),
        ];
        assert_eq!(income_stability(&txns, today), IncomeStability::Stable);
    }

    #[test]
    fn test_irregular_income() {
        let today = date(2024, 5, 20);
        // Mean 10000, April deviates by 50%
        let txns = vec![salary(date(2024, 4, 1), 5000), salary(date(2024, 5, 1), 15000)];
        assert_eq!(income_stability(&txns, today), IncomeStability::Irregular);
    }

    #[test]
    fn test_stability_boundary_is_exclusive() {
        let today = date(2024, 5, 20);
        // Mean 10000, each month exactly 30% away: not more than 30%
        let txns = vec![salary(date(2024, 4, 1), 7000), salary(date(2024, 5, 1), 13000)];
        assert_eq!(income_stability(&txns, today), IncomeStability::Stable);

        let txns = vec![salary(date(2024, 4, 1), 6998), salary(date(2024, 5, 1), 13002)];
        assert_eq!(income_stability(&txns, today), IncomeStability::Irregular);
    }

    #[test]
    fn test_stability_window_excludes_old_income() {
        let today = date(2024, 5, 20);
        // 2024-02-20 is exactly 90 days back and falls outside the window
        let txns = vec![salary(date(2024, 2, 20), 10000), salary(date(2024, 5, 1), 10000)];
        assert_eq!(income_stability(&txns, today), IncomeStability::Irregular);

        let txns = vec![salary(date(2024, 2, 21), 10000), salary(date(2024, 5, 1), 10000)];
        assert_eq!(income_stability(&txns, today), IncomeStability::Stable);
    }

    #[test]
    fn test_stability_ignores_expenses() {
        let today = date(2024, 5, 20);
        let txns = vec![spend(date(2024, 4, 1), 10000), salary(date(2024, 5, 1), 10000)];
        assert_eq!(income_stability(&txns, today), IncomeStability::Irregular);
    }
}
