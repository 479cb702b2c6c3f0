//! Budget CLI commands
//!
//! Setting a monthly limit per expense category, and viewing limits against
//! the month's spending.

use chrono::NaiveDate;
use clap::Subcommand;

use super::{parse_amount, resolve_month};
use crate::analytics::evaluate_budgets;
use crate::config::settings::Settings;
use crate::display::{format_budget_summary, format_budget_table, money};
use crate::error::TrackerResult;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the monthly budget for a category
    Set {
        /// Expense category (e.g., "Food")
        category: String,
        /// Amount (e.g., "300" or "300.00")
        amount: String,
    },

    /// Show each budget against this month's spending
    View {
        /// Month to evaluate (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show budget totals and categories over budget
    Summary {
        /// Month to evaluate (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: BudgetCommands,
) -> TrackerResult<()> {
    let symbol = &settings.currency_symbol;

    match cmd {
        BudgetCommands::Set { category, amount } => {
            let amount = parse_amount(&amount)?;
            let change = BudgetService::new(storage).set(&category, amount)?;

            match change.previous {
                Some(previous) => println!(
                    "Budget for {} updated: {} -> {}",
                    change.category,
                    money(previous, symbol),
                    money(change.amount, symbol)
                ),
                None => println!(
                    "Budget for {} set to {}",
                    change.category,
                    money(change.amount, symbol)
                ),
            }
        }

        BudgetCommands::View { month } => {
            let month = resolve_month(month.as_deref(), today)?;
            let snapshot = storage.snapshot()?;
            let evaluation = evaluate_budgets(&snapshot.transactions, &snapshot.budgets, month);
            print!("{}", format_budget_table(&evaluation, symbol));
        }

        BudgetCommands::Summary { month } => {
            let month = resolve_month(month.as_deref(), today)?;
            let snapshot = storage.snapshot()?;
            let evaluation = evaluate_budgets(&snapshot.transactions, &snapshot.budgets, month);
            print!("{}", format_budget_summary(&evaluation, symbol));
        }
    }

    Ok(())
}
