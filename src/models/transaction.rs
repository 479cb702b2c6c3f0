//! Transaction model
//!
//! A transaction is an immutable income or expense record. Once recorded it
//! is never edited; reports always re-derive ordering from `date`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// Spending categories offered when recording an expense
pub const EXPENSE_CATEGORIES: [&str; 7] = [
    "Food",
    "Transport",
    "Shopping",
    "Bills",
    "Entertainment",
    "Health",
    "Other",
];

/// Income sources offered when recording income
pub const INCOME_SOURCES: [&str; 6] = [
    "Salary",
    "Freelance",
    "Business",
    "Investment",
    "Gift",
    "Other",
];

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// The labels a user may pick from for this kind
    pub fn known_categories(&self) -> &'static [&'static str] {
        match self {
            Self::Income => &INCOME_SOURCES,
            Self::Expense => &EXPENSE_CATEGORIES,
        }
    }

    /// Resolve user input to a known category label, ignoring case
    pub fn canonical_category(&self, input: &str) -> Option<&'static str> {
        let input = input.trim();
        self.known_categories()
            .iter()
            .copied()
            .find(|known| known.eq_ignore_ascii_case(input))
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Income" => Ok(Self::Income),
            "Expense" => Ok(Self::Expense),
            other => Err(format!("unknown transaction type '{}'", other)),
        }
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar date, no time component
    pub date: NaiveDate,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Spending category, or income source
    pub category: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Amount in minor units
    pub amount: Money,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        date: NaiveDate,
        kind: TransactionKind,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            date,
            kind,
            category: category.into(),
            description: description.into(),
            amount,
        }
    }

    /// Create an expense
    pub fn expense(
        date: NaiveDate,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self::new(date, TransactionKind::Expense, category, description, amount)
    }

    /// Create an income record
    pub fn income(
        date: NaiveDate,
        source: impl Into<String>,
        description: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self::new(date, TransactionKind::Income, source, description, amount)
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Validate the transaction before it is recorded
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }

        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::MissingCategory);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date, self.kind, self.category, self.amount
        )?;
        if !self.description.is_empty() {
            write!(f, " ({})", self.description)?;
        }
        Ok(())
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    MissingCategory,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be a positive number, got {}", amount)
            }
            Self::MissingCategory => write!(f, "Category is required"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_kind_round_trip_through_str() {
        assert_eq!("Income".parse::<TransactionKind>().unwrap(), TransactionKind::Income);
        assert_eq!("Expense".parse::<TransactionKind>().unwrap(), TransactionKind::Expense);
        assert!("expense".parse::<TransactionKind>().is_err());
        assert_eq!(TransactionKind::Expense.to_string(), "Expense");
    }

    #[test]
    fn test_canonical_category() {
        assert_eq!(TransactionKind::Expense.canonical_category("food"), Some("Food"));
        assert_eq!(TransactionKind::Income.canonical_category(" SALARY "), Some("Salary"));
        assert_eq!(TransactionKind::Income.canonical_category("Food"), None);
        assert_eq!(TransactionKind::Expense.canonical_category("Salary"), None);
    }

    #[test]
    fn test_validation() {
        let txn = Transaction::expense(test_date(), "Food", "lunch", Money::from_cents(500));
        assert!(txn.validate().is_ok());

        let zero = Transaction::expense(test_date(), "Food", "", Money::zero());
        assert!(matches!(
            zero.validate(),
            Err(TransactionValidationError::NonPositiveAmount(_))
        ));

        let blank = Transaction::income(test_date(), "  ", "", Money::from_cents(100));
        assert_eq!(
            blank.validate(),
            Err(TransactionValidationError::MissingCategory)
        );
    }

    #[test]
    fn test_serialization_uses_type_key() {
        let txn = Transaction::income(test_date(), "Salary", "pay", Money::from_cents(10000));
        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["type"], "Income");
        assert_eq!(json["amount"], 10000);
        assert_eq!(json["date"], "2025-01-15");
    }

    #[test]
    fn test_display() {
        let txn = Transaction::expense(test_date(), "Food", "lunch", Money::from_cents(500));
        assert_eq!(txn.to_string(), "2025-01-15 Expense Food 5.00 (lunch)");
    }
}
