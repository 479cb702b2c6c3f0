//! Period aggregation
//!
//! Buckets transactions by calendar month and by (kind, category). Every other
//! analytics component builds on these sums.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{Money, Month, Transaction, TransactionKind};

/// Sum of one category within a month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// Category (or income source) label
    pub category: String,
    /// Total amount
    pub amount: Money,
    /// Number of transactions contributing
    pub count: usize,
}

/// Per-category sums, kept in the order each category first appeared
///
/// First-appearance order is what ties fall back to when ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    entries: Vec<CategoryTotal>,
}

impl CategoryTotals {
    fn add(&mut self, category: &str, amount: Money) {
        match self.entries.iter_mut().find(|e| e.category == category) {
            Some(entry) => {
                entry.amount += amount;
                entry.count += 1;
            }
            None => self.entries.push(CategoryTotal {
                category: category.to_string(),
                amount,
                count: 1,
            }),
        }
    }

    /// Total for a category, zero when it has no transactions
    pub fn get(&self, category: &str) -> Money {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.amount)
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum across all categories
    pub fn total(&self) -> Money {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// Categories by amount, largest first; ties keep first-appearance order
    pub fn ranked(&self) -> Vec<&CategoryTotal> {
        let mut ranked: Vec<&CategoryTotal> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.amount.cmp(&a.amount));
        ranked
    }

    /// The `limit` largest categories
    pub fn top(&self, limit: usize) -> Vec<&CategoryTotal> {
        self.ranked().into_iter().take(limit).collect()
    }

    /// The largest category; the first one seen wins a tie
    pub fn largest(&self) -> Option<&CategoryTotal> {
        self.entries.iter().fold(None, |best, entry| match best {
            Some(current) if entry.amount <= current.amount => Some(current),
            _ => Some(entry),
        })
    }
}

/// Income, expense and savings for one month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthTotals {
    pub month: Month,
    pub income: Money,
    pub expense: Money,
}

impl MonthTotals {
    /// Income minus expense
    pub fn savings(&self) -> Money {
        self.income - self.expense
    }

    /// Savings as a percentage of income, 0 when there is no income
    pub fn savings_rate(&self) -> f64 {
        if self.income.is_positive() {
            self.savings().percent_of(self.income)
        } else {
            0.0
        }
    }
}

/// Month-scoped view over a transaction snapshot
#[derive(Debug, Clone, Copy)]
pub struct PeriodAggregator<'a> {
    transactions: &'a [Transaction],
    month: Month,
}

impl<'a> PeriodAggregator<'a> {
    pub fn new(transactions: &'a [Transaction], month: Month) -> Self {
        Self {
            transactions,
            month,
        }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    /// Transactions dated within the month, in snapshot order
    pub fn in_month(&self) -> impl Iterator<Item = &'a Transaction> + 'a {
        let month = self.month;
        self.transactions
            .iter()
            .filter(move |t| month.contains(t.date))
    }

    /// Sum of the month's transactions of one kind
    pub fn total_by_kind(&self, kind: TransactionKind) -> Money {
        self.in_month()
            .filter(|t| t.kind == kind)
            .map(|t| t.amount)
            .sum()
    }

    /// Month total of one kind spread over `days`, 0 when `days` is 0
    pub fn average_daily(&self, kind: TransactionKind, days: u32) -> Money {
        self.total_by_kind(kind).fraction(1, i64::from(days))
    }

    /// Category sums for the month's transactions of one kind
    pub fn total_by_category(&self, kind: TransactionKind) -> CategoryTotals {
        let mut totals = CategoryTotals::default();
        for txn in self.in_month().filter(|t| t.kind == kind) {
            totals.add(&txn.category, txn.amount);
        }
        totals
    }

    /// Expense total for a single category
    pub fn spent_in(&self, category: &str) -> Money {
        self.in_month()
            .filter(|t| t.is_expense() && t.category == category)
            .map(|t| t.amount)
            .sum()
    }

    pub fn totals(&self) -> MonthTotals {
        MonthTotals {
            month: self.month,
            income: self.total_by_kind(TransactionKind::Income),
            expense: self.total_by_kind(TransactionKind::Expense),
        }
    }

    /// The month's largest transactions of either kind, largest first
    pub fn top_transactions(&self, limit: usize) -> Vec<&'a Transaction> {
        let mut txns: Vec<&'a Transaction> = self.in_month().collect();
        txns.sort_by(|a, b| b.amount.cmp(&a.amount));
        txns.truncate(limit);
        txns
    }
}

/// Sum of one kind across every recorded transaction
pub fn total_by_kind_all_time(transactions: &[Transaction], kind: TransactionKind) -> Money {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

/// Lifetime income minus lifetime expenses
pub fn lifetime_savings(transactions: &[Transaction]) -> Money {
    total_by_kind_all_time(transactions, TransactionKind::Income)
        - total_by_kind_all_time(transactions, TransactionKind::Expense)
}

/// Sum of one kind on a single day
pub fn total_on_day(transactions: &[Transaction], kind: TransactionKind, date: NaiveDate) -> Money {
    transactions
        .iter()
        .filter(|t| t.kind == kind && t.date == date)
        .map(|t| t.amount)
        .sum()
}

/// Income and expense per month for every month that has data, oldest first
pub fn monthly_series(transactions: &[Transaction]) -> Vec<MonthTotals> {
    let mut by_month: BTreeMap<Month, MonthTotals> = BTreeMap::new();

    for txn in transactions {
        let month = Month::containing(txn.date);
        let entry = by_month.entry(month).or_insert(MonthTotals {
            month,
            income: Money::zero(),
            expense: Money::zero(),
        });
        match txn.kind {
            TransactionKind::Income => entry.income += txn.amount,
            TransactionKind::Expense => entry.expense += txn.amount,
        }
    }

    by_month.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn may() -> Month {
        Month::new(2024, 5).unwrap()
    }

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::expense(date(2024, 5, 1), "Food", "lunch", Money::from_cents(500)),
            Transaction::income(date(2024, 5, 2), "Salary", "pay", Money::from_cents(10000)),
            Transaction::expense(date(2024, 5, 3), "Transport", "bus", Money::from_cents(300)),
            Transaction::expense(date(2024, 5, 20), "Food", "groceries", Money::from_cents(1200)),
            Transaction::expense(date(2024, 4, 30), "Food", "dinner", Money::from_cents(900)),
            Transaction::income(date(2024, 6, 1), "Gift", "birthday", Money::from_cents(2500)),
        ]
    }

    #[test]
    fn test_totals_by_kind() {
        let txns = sample();
        let agg = PeriodAggregator::new(&txns, may());

        assert_eq!(agg.total_by_kind(TransactionKind::Income).cents(), 10000);
        assert_eq!(agg.total_by_kind(TransactionKind::Expense).cents(), 2000);
    }

    #[test]
    fn test_savings_equals_income_minus_expense() {
        let txns = sample();
        for month in [may(), may().prev(), may().next()] {
            let agg = PeriodAggregator::new(&txns, month);
            let totals = agg.totals();
            assert_eq!(
                agg.total_by_kind(TransactionKind::Income) - agg.total_by_kind(TransactionKind::Expense),
                totals.savings()
            );
        }
    }

    #[test]
    fn test_total_by_category_keeps_first_appearance_order() {
        let txns = sample();
        let by_cat = PeriodAggregator::new(&txns, may()).total_by_category(TransactionKind::Expense);

        let labels: Vec<&str> = by_cat.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(labels, vec!["Food", "Transport"]);
        assert_eq!(by_cat.get("Food").cents(), 1700);
        assert_eq!(by_cat.get("Health"), Money::zero());
        assert_eq!(by_cat.iter().next().unwrap().count, 2);
    }

    #[test]
    fn test_empty_snapshot() {
        let agg = PeriodAggregator::new(&[], may());
        assert_eq!(agg.total_by_kind(TransactionKind::Income), Money::zero());
        assert!(agg.total_by_category(TransactionKind::Expense).is_empty());
        assert_eq!(agg.totals().savings_rate(), 0.0);
        assert!(monthly_series(&[]).is_empty());
    }

    #[test]
    fn test_all_time_totals() {
        let txns = sample();
        assert_eq!(
            total_by_kind_all_time(&txns, TransactionKind::Income).cents(),
            12500
        );
        assert_eq!(lifetime_savings(&txns).cents(), 12500 - 2900);
    }

    #[test]
    fn test_ranked_ties_are_stable() {
        let txns = vec![
            Transaction::expense(date(2024, 5, 1), "Bills", "", Money::from_cents(100)),
            Transaction::expense(date(2024, 5, 1), "Food", "", Money::from_cents(300)),
            Transaction::expense(date(2024, 5, 1), "Health", "", Money::from_cents(100)),
        ];
        let by_cat = PeriodAggregator::new(&txns, may()).total_by_category(TransactionKind::Expense);

        let ranked: Vec<&str> = by_cat.ranked().iter().map(|c| c.category.as_str()).collect();
        assert_eq!(ranked, vec!["Food", "Bills", "Health"]);
        assert_eq!(by_cat.top(1)[0].category, "Food");
    }

    #[test]
    fn test_largest_prefers_first_on_tie() {
        let txns = vec![
            Transaction::expense(date(2024, 5, 1), "Bills", "", Money::from_cents(300)),
            Transaction::expense(date(2024, 5, 1), "Food", "", Money::from_cents(300)),
        ];
        let by_cat = PeriodAggregator::new(&txns, may()).total_by_category(TransactionKind::Expense);
        assert_eq!(by_cat.largest().unwrap().category, "Bills");
    }

    #[test]
    fn test_top_transactions() {
        let txns = sample();
        let top = PeriodAggregator::new(&txns, may()).top_transactions(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].amount.cents(), 10000);
        assert_eq!(top[1].amount.cents(), 1200);
    }

    #[test]
    fn test_total_on_day() {
        let txns = sample();
        assert_eq!(
            total_on_day(&txns, TransactionKind::Expense, date(2024, 5, 1)).cents(),
            500
        );
        assert_eq!(
            total_on_day(&txns, TransactionKind::Expense, date(2024, 5, 2)),
            Money::zero()
        );
    }

    #[test]
    fn test_monthly_series_is_ascending() {
        let series = monthly_series(&sample());
        let months: Vec<String> = series.iter().map(|m| m.month.to_string()).collect();
        assert_eq!(months, vec!["2024-04", "2024-05", "2024-06"]);
        assert_eq!(series[1].income.cents(), 10000);
        assert_eq!(series[1].expense.cents(), 2000);
    }

    #[test]
    fn test_aggregation_is_deterministic() {
        let txns = sample();
        let first = PeriodAggregator::new(&txns, may()).total_by_category(TransactionKind::Expense);
        let second = PeriodAggregator::new(&txns, may()).total_by_category(TransactionKind::Expense);
        assert_eq!(first, second);
    }
}
