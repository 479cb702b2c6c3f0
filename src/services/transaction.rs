//! Transaction service
//!
//! Validates and records transactions, and answers the list and balance
//! queries that do not need the analytics layer.

use chrono::NaiveDate;
use tracing::info;

use crate::analytics::total_by_kind_all_time;
use crate::audit::EntityType;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, Transaction, TransactionKind};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Only this kind
    pub kind: Option<TransactionKind>,
    /// Only transactions on or after this date
    pub since: Option<NaiveDate>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn since(mut self, date: NaiveDate) -> Self {
        self.since = Some(date);
        self
    }

    fn matches(&self, txn: &Transaction) -> bool {
        self.kind.map_or(true, |kind| txn.kind == kind)
            && self.since.map_or(true, |since| txn.date >= since)
    }
}

/// Input for recording a new transaction
#[derive(Debug, Clone)]
pub struct RecordTransactionInput {
    pub kind: TransactionKind,
    pub date: NaiveDate,
    pub amount: Money,
    pub category: String,
    pub description: Option<String>,
}

/// Lifetime totals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Balance {
    pub income: Money,
    pub expenses: Money,
}

impl Balance {
    pub fn net(&self) -> Money {
        self.income - self.expenses
    }
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and append a transaction
    ///
    /// The category must be one of the labels known for the kind (matched
    /// without regard to case) and is stored in its canonical spelling.
    pub fn record(&self, input: RecordTransactionInput) -> TrackerResult<Transaction> {
        let category = input.kind.canonical_category(&input.category).ok_or_else(|| {
            TrackerError::Validation(format!(
                "Unknown {} category '{}'. Choose one of: {}",
                input.kind.to_string().to_lowercase(),
                input.category.trim(),
                input.kind.known_categories().join(", ")
            ))
        })?;

        let description = input
            .description
            .map(|d| d.trim().to_string())
            .unwrap_or_default();

        let txn = Transaction::new(input.date, input.kind, category, description, input.amount);
        txn.validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        self.storage.transactions.append(&txn)?;
        self.storage.log_create(
            EntityType::Transaction,
            format!("{}/{}", txn.date, txn.category),
            &txn,
        )?;

        info!(kind = %txn.kind, category = %txn.category, amount = txn.amount.cents(), "transaction recorded");
        Ok(txn)
    }

    /// Transactions matching the filter, newest first
    ///
    /// Same-day transactions keep their file order.
    pub fn list(&self, filter: &TransactionFilter) -> TrackerResult<Vec<Transaction>> {
        let mut transactions: Vec<Transaction> = self
            .storage
            .transactions
            .load()?
            .into_iter()
            .filter(|t| filter.matches(t))
            .collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(transactions)
    }

    /// Lifetime income, expenses and their difference
    pub fn balance(&self) -> TrackerResult<Balance> {
        let transactions = self.storage.transactions.load()?;
        Ok(Balance {
            income: total_by_kind_all_time(&transactions, TransactionKind::Income),
            expenses: total_by_kind_all_time(&transactions, TransactionKind::Expense),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    fn input(kind: TransactionKind, d: u32, category: &str, cents: i64) -> RecordTransactionInput {
        RecordTransactionInput {
            kind,
            date: date(d),
            amount: Money::from_cents(cents),
            category: category.to_string(),
            description: None,
        }
    }

    #[test]
    fn test_record_canonicalizes_category() {
        let (_temp, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service
            .record(input(TransactionKind::Expense, 1, "food", 500))
            .unwrap();
        assert_eq!(txn.category, "Food");

        let stored = storage.transactions.load().unwrap();
        assert_eq!(stored, vec![txn]);
        assert_eq!(storage.audit().read_all().unwrap().len(), 1);
    }

    #[test]
    fn test_record_rejects_unknown_category() {
        let (_temp, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let err = service
            .record(input(TransactionKind::Income, 1, "Food", 500))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(storage.transactions.load().unwrap().is_empty());
    }

    #[test]
    fn test_record_rejects_non_positive_amount() {
        let (_temp, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        assert!(service
            .record(input(TransactionKind::Expense, 1, "Food", 0))
            .unwrap_err()
            .is_validation());
        assert!(service
            .record(input(TransactionKind::Expense, 1, "Food", -100))
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_list_filters_and_orders() {
        let (_temp, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        service.record(input(TransactionKind::Expense, 3, "Food", 100)).unwrap();
        service.record(input(TransactionKind::Income, 10, "Salary", 9000)).unwrap();
        service.record(input(TransactionKind::Expense, 7, "Bills", 200)).unwrap();

        let all = service.list(&TransactionFilter::new()).unwrap();
        let days: Vec<u32> = all.iter().map(|t| chrono::Datelike::day(&t.date)).collect();
        assert_eq!(days, vec![10, 7, 3]);

        let expenses = service
            .list(&TransactionFilter::new().kind(TransactionKind::Expense))
            .unwrap();
        assert_eq!(expenses.len(), 2);

        let recent = service.list(&TransactionFilter::new().since(date(7))).unwrap();
        assert_eq!(recent.len(), 2);
    }

    #[test]
    fn test_balance() {
        let (_temp, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        service.record(input(TransactionKind::Income, 1, "Salary", 10000)).unwrap();
        service.record(input(TransactionKind::Expense, 2, "Food", 2500)).unwrap();

        let balance = service.balance().unwrap();
        assert_eq!(balance.income.cents(), 10000);
        assert_eq!(balance.expenses.cents(), 2500);
        assert_eq!(balance.net().cents(), 7500);
    }
}
