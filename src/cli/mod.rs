//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service and report layers.
//! Handlers print to stdout and return errors for the binary to report.

pub mod assistant;
pub mod budget;
pub mod export;
pub mod goal;
pub mod report;
pub mod transaction;

pub use assistant::{handle_assistant_command, AssistantCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use export::{handle_export_command, ExportCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{
    handle_add_command, handle_balance_command, handle_list_command, AddArgs, KindFilter,
    ListArgs,
};

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, Month};

/// Parse a user-entered amount in major units ("12.50", "$12.50")
pub(crate) fn parse_amount(input: &str) -> TrackerResult<Money> {
    let amount = Money::parse(input).map_err(|_| {
        TrackerError::Validation(format!(
            "Invalid amount '{}'. Please enter a number like 12.50",
            input.trim()
        ))
    })?;

    if !amount.is_positive() {
        return Err(TrackerError::Validation(
            "Amount must be a positive number.".into(),
        ));
    }

    Ok(amount)
}

/// Parse a `YYYY-MM-DD` date
pub(crate) fn parse_date(input: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        TrackerError::Validation("Invalid date format. Please use YYYY-MM-DD.".into())
    })
}

/// The month named by `--month`, else the month containing `today`
pub(crate) fn resolve_month(month: Option<&str>, today: NaiveDate) -> TrackerResult<Month> {
    match month {
        Some(s) => Month::parse(s).map_err(|e| TrackerError::Validation(e.to_string())),
        None => Ok(Month::containing(today)),
    }
}
