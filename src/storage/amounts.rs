//! Name-to-amount repositories: `budgets.txt` and `goals.txt`
//!
//! Both files hold `name,amount` lines with the amount in minor units. A name
//! that appears twice keeps its last amount. Setting an entry rewrites the
//! whole file atomically.

use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::TrackerResult;
use crate::models::{Budgets, Goals, Money};

use super::file_io::{read_records, write_records_atomic};

/// Shared implementation for the budget and goal files
#[derive(Debug, Clone)]
struct AmountFile {
    path: PathBuf,
}

impl AmountFile {
    fn load(&self) -> TrackerResult<BTreeMap<String, Money>> {
        let rows: Vec<(String, Money)> = read_records(&self.path)?;
        let row_count = rows.len();

        let map: BTreeMap<String, Money> = rows.into_iter().collect();
        if map.len() < row_count {
            warn!(path = %self.path.display(), "duplicate names found; the last entry wins");
        }

        debug!(count = map.len(), path = %self.path.display(), "loaded amounts");
        Ok(map)
    }

    /// Set one entry and return the amount it replaced
    fn set(&self, name: &str, amount: Money) -> TrackerResult<Option<Money>> {
        let mut map = self.load()?;
        let previous = map.insert(name.to_string(), amount);
        write_records_atomic(&self.path, map.iter())?;
        Ok(previous)
    }
}

/// Monthly budget limits per category
#[derive(Debug, Clone)]
pub struct BudgetRepository {
    file: AmountFile,
}

impl BudgetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AmountFile { path },
        }
    }

    pub fn load(&self) -> TrackerResult<Budgets> {
        self.file.load()
    }

    /// Set a category's limit, returning the previous one if any
    pub fn set(&self, category: &str, amount: Money) -> TrackerResult<Option<Money>> {
        self.file.set(category, amount)
    }
}

/// Savings targets per goal name
#[derive(Debug, Clone)]
pub struct GoalRepository {
    file: AmountFile,
}

impl GoalRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AmountFile { path },
        }
    }

    pub fn load(&self) -> TrackerResult<Goals> {
        self.file.load()
    }

    /// Set a goal's target, returning the previous one if any
    pub fn set(&self, name: &str, amount: Money) -> TrackerResult<Option<Money>> {
        self.file.set(name, amount)
    }
}
