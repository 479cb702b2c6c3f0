//! Budget and goal maps, and the snapshot bundle handed to reports

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::transaction::Transaction;

/// Monthly spending limit per category. One entry per category; a budget
/// applies uniformly to every month.
pub type Budgets = BTreeMap<String, Money>;

/// Savings target per goal name
pub type Goals = BTreeMap<String, Money>;

/// Everything the reports read, loaded once per command
///
/// Reports borrow from a snapshot and never write back. After a mutation the
/// caller loads a fresh snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub transactions: Vec<Transaction>,
    pub budgets: Budgets,
    pub goals: Goals,
}

impl Snapshot {
    pub fn new(transactions: Vec<Transaction>, budgets: Budgets, goals: Goals) -> Self {
        Self {
            transactions,
            budgets,
            goals,
        }
    }

    /// True when nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty() && self.budgets.is_empty() && self.goals.is_empty()
    }
}
