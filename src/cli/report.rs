//! CLI commands for reports
//!
//! Every report reads one snapshot and defaults to the month containing the
//! evaluation date.

use chrono::NaiveDate;
use clap::Subcommand;

use super::resolve_month;
use crate::config::settings::Settings;
use crate::error::TrackerResult;
use crate::reports::{HealthReport, IncomeReport, MonthlyReport, SavingsReport, SpendingReport};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Spending by category with a month-over-month comparison
    Spending {
        /// Month to report on (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Income by source and income stability
    Income {
        /// Month to report on (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Savings, savings rate and the three-month trend
    Savings {
        /// Month to report on (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Financial health score out of 100
    Health {
        /// Month to score (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// One-page monthly summary
    Monthly {
        /// Month to report on (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },
}

impl ReportCommands {
    fn month(&self) -> Option<&str> {
        match self {
            Self::Spending { month }
            | Self::Income { month }
            | Self::Savings { month }
            | Self::Health { month }
            | Self::Monthly { month } => month.as_deref(),
        }
    }
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: ReportCommands,
) -> TrackerResult<()> {
    let month = resolve_month(cmd.month(), today)?;
    let snapshot = storage.snapshot()?;
    let symbol = &settings.currency_symbol;

    if snapshot.transactions.is_empty() {
        println!("No transactions found.");
        return Ok(());
    }

    let output = match cmd {
        ReportCommands::Spending { .. } => {
            SpendingReport::generate(&snapshot, month, today).format_terminal(symbol)
        }
        ReportCommands::Income { .. } => {
            IncomeReport::generate(&snapshot, month, today).format_terminal(symbol)
        }
        ReportCommands::Savings { .. } => {
            SavingsReport::generate(&snapshot, month).format_terminal(symbol)
        }
        ReportCommands::Health { .. } => HealthReport::generate(&snapshot, month).format_terminal(),
        ReportCommands::Monthly { .. } => {
            MonthlyReport::generate(&snapshot, month, settings.top_transactions)
                .format_terminal(symbol)
        }
    };

    print!("{}", output);
    Ok(())
}
