//! Assistant CLI commands: daily check, advice, alerts and savings
//! opportunities for the current month

use chrono::NaiveDate;
use clap::Subcommand;

use crate::analytics::{daily_check, recommendations, savings_opportunities, spending_alerts};
use crate::config::settings::Settings;
use crate::display::{
    format_alerts, format_daily_check, format_recommendations, format_savings_opportunities,
};
use crate::error::TrackerResult;
use crate::models::Month;
use crate::storage::Storage;

/// Assistant subcommands
#[derive(Subcommand, Debug)]
pub enum AssistantCommands {
    /// Today's spending against the daily budget, with a tip
    Daily,

    /// Advice based on budgets, savings rate and income stability
    #[command(alias = "recs")]
    Recommendations,

    /// Budget warnings, large transactions and the top category
    Alerts,

    /// Categories where a 10% cut would save the most
    Opportunities,
}

/// Handle assistant commands
pub fn handle_assistant_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: AssistantCommands,
) -> TrackerResult<()> {
    let snapshot = storage.snapshot()?;
    let symbol = &settings.currency_symbol;
    let month = Month::containing(today);

    let output = match cmd {
        AssistantCommands::Daily => format_daily_check(
            &daily_check(&snapshot.transactions, &snapshot.budgets, today),
            symbol,
        ),
        AssistantCommands::Recommendations => format_recommendations(
            &recommendations(&snapshot.transactions, &snapshot.budgets, today),
            symbol,
        ),
        AssistantCommands::Alerts => format_alerts(
            &spending_alerts(&snapshot.transactions, &snapshot.budgets, month),
            symbol,
        ),
        AssistantCommands::Opportunities => format_savings_opportunities(
            &savings_opportunities(&snapshot.transactions, month),
            symbol,
        ),
    };

    print!("{}", output);
    Ok(())
}
