//! Transaction CLI commands: add, list and balance

use chrono::{Duration, NaiveDate};
use clap::{Args, ValueEnum};

use super::{parse_amount, parse_date};
use crate::config::settings::Settings;
use crate::display::{format_transaction_line, format_transaction_table, money};
use crate::error::TrackerResult;
use crate::models::TransactionKind;
use crate::services::{RecordTransactionInput, TransactionFilter, TransactionService};
use crate::storage::Storage;

/// Which kind of transaction to record
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Expense,
    Income,
}

impl From<KindArg> for TransactionKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Expense => TransactionKind::Expense,
            KindArg::Income => TransactionKind::Income,
        }
    }
}

/// Kind filter for `list`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum KindFilter {
    #[default]
    All,
    Expense,
    Income,
}

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// expense or income
    #[arg(value_enum)]
    pub kind: KindArg,

    /// Amount (e.g., "12.50")
    pub amount: String,

    /// Expense category or income source
    #[arg(short, long)]
    pub category: String,

    /// Free-form description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Transaction date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show one kind of transaction
    #[arg(short, long, value_enum, default_value_t = KindFilter::All)]
    pub kind: KindFilter,

    /// Only show the last few days (see `recent_days` in settings)
    #[arg(short, long)]
    pub recent: bool,
}

/// Handle the add command
pub fn handle_add_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    args: AddArgs,
) -> TrackerResult<()> {
    let amount = parse_amount(&args.amount)?;
    let date = match args.date.as_deref() {
        Some(d) => parse_date(d)?,
        None => today,
    };

    let service = TransactionService::new(storage);
    let txn = service.record(RecordTransactionInput {
        kind: args.kind.into(),
        date,
        amount,
        category: args.category,
        description: args.description,
    })?;

    println!(
        "{} recorded: {}",
        txn.kind,
        format_transaction_line(&txn, &settings.currency_symbol)
    );
    Ok(())
}

/// Handle the list command
pub fn handle_list_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    args: ListArgs,
) -> TrackerResult<()> {
    let mut filter = TransactionFilter::new();
    match args.kind {
        KindFilter::All => {}
        KindFilter::Expense => filter = filter.kind(TransactionKind::Expense),
        KindFilter::Income => filter = filter.kind(TransactionKind::Income),
    }
    if args.recent {
        filter = filter.since(today - Duration::days(i64::from(settings.recent_days)));
    }

    let transactions = TransactionService::new(storage).list(&filter)?;
    print!(
        "{}",
        format_transaction_table(&transactions, &settings.currency_symbol)
    );
    Ok(())
}

/// Handle the balance command
pub fn handle_balance_command(storage: &Storage, settings: &Settings) -> TrackerResult<()> {
    let balance = TransactionService::new(storage).balance()?;
    let symbol = &settings.currency_symbol;

    println!("Total Income:   {}", money(balance.income, symbol));
    println!("Total Expenses: {}", money(balance.expenses, symbol));
    println!("Balance:        {}", money(balance.net(), symbol));
    Ok(())
}
