//! Transaction repository backed by `transactions.txt`
//!
//! One record per line: `date,kind,category,description,amount`. Recording a
//! transaction appends a line; nothing is ever rewritten.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::TrackerResult;
use crate::models::Transaction;

use super::file_io::{append_record, read_records};

/// Repository for transaction persistence
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    path: PathBuf,
}

impl TransactionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load every transaction in file order
    pub fn load(&self) -> TrackerResult<Vec<Transaction>> {
        let transactions: Vec<Transaction> = read_records(&self.path)?;

        for txn in transactions.iter().filter(|t| t.validate().is_err()) {
            warn!(
                date = %txn.date,
                category = %txn.category,
                amount = txn.amount.cents(),
                "stored transaction has a non-positive amount"
            );
        }

        debug!(count = transactions.len(), path = %self.path.display(), "loaded transactions");
        Ok(transactions)
    }

    /// Append a transaction to the end of the file
    pub fn append(&self, txn: &Transaction) -> TrackerResult<()> {
        append_record(&self.path, txn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackerError;
    use crate::models::{Money, TransactionKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, TransactionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = TransactionRepository::new(temp_dir.path().join("transactions.txt"));
        (temp_dir, repo)
    }

    fn lunch() -> Transaction {
        Transaction::expense(
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            "Food",
            "lunch, with friends",
            Money::from_cents(500),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp, repo) = create_test_repo();
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_append_and_reload() {
        let (_temp, repo) = create_test_repo();
        let pay = Transaction::income(
            NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            "Salary",
            "",
            Money::from_cents(10000),
        );

        repo.append(&lunch()).unwrap();
        repo.append(&pay).unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded, vec![lunch(), pay]);
    }

    #[test]
    fn test_file_format() {
        let (_temp, repo) = create_test_repo();
        repo.append(&lunch()).unwrap();

        let text = std::fs::read_to_string(repo.path()).unwrap();
        assert_eq!(text, "2024-05-01,Expense,Food,\"lunch, with friends\",500\n");
    }

    #[test]
    fn test_reads_plain_lines() {
        let (_temp, repo) = create_test_repo();
        std::fs::write(
            repo.path(),
            "2024-05-01,Expense,Food,lunch,500\n\n2024-05-02,Income,Salary,pay,10000\n",
        )
        .unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].kind, TransactionKind::Income);
        assert_eq!(loaded[1].amount.cents(), 10000);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let (_temp, repo) = create_test_repo();
        std::fs::write(
            repo.path(),
            "2024-05-01,Expense,Food,lunch,500\n2024-05-02,Refund,Food,x,100\n",
        )
        .unwrap();

        match repo.load().unwrap_err() {
            TrackerError::InvalidRecord { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let (_temp, repo) = create_test_repo();
        std::fs::write(repo.path(), "2024-13-01,Expense,Food,lunch,500\n").unwrap();
        assert!(matches!(
            repo.load(),
            Err(TrackerError::InvalidRecord { line: 1, .. })
        ));
    }

    #[test]
    fn test_non_positive_amount_is_kept() {
        let (_temp, repo) = create_test_repo();
        std::fs::write(repo.path(), "2024-05-01,Expense,Food,refund,-200\n").unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded[0].amount.cents(), -200);
    }
}
