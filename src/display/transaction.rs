//! Transaction list formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::{money, truncate};
use crate::models::Transaction;

const DESCRIPTION_WIDTH: usize = 30;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format transactions as a table, in the order given
pub fn format_transaction_table(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions.iter().map(|txn| TransactionRow {
        date: txn.date.format("%Y-%m-%d").to_string(),
        kind: txn.kind.to_string(),
        category: txn.category.clone(),
        description: truncate(&txn.description, DESCRIPTION_WIDTH),
        amount: money(txn.amount, symbol),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// One-line summary used after recording a transaction
pub fn format_transaction_line(txn: &Transaction, symbol: &str) -> String {
    let mut line = format!(
        "{} {} {} {}",
        txn.date.format("%Y-%m-%d"),
        txn.kind,
        txn.category,
        money(txn.amount, symbol)
    );
    if !txn.description.is_empty() {
        line.push_str(&format!(" ({})", txn.description));
    }
    line
}
