//! Savings goal CLI commands

use clap::Subcommand;

use super::parse_amount;
use crate::analytics::goals_progress;
use crate::config::settings::Settings;
use crate::display::{format_goals_progress, money};
use crate::error::TrackerResult;
use crate::services::GoalService;
use crate::storage::Storage;

/// Goal subcommands
#[derive(Subcommand, Debug)]
pub enum GoalCommands {
    /// Create a savings goal, or change its target
    Set {
        /// Goal name (e.g., "Vacation")
        name: String,
        /// Target amount (e.g., "1500")
        amount: String,
    },

    /// Show progress toward every goal
    Progress,
}

/// Handle goal commands
pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> TrackerResult<()> {
    let symbol = &settings.currency_symbol;

    match cmd {
        GoalCommands::Set { name, amount } => {
            let amount = parse_amount(&amount)?;
            let name = name.trim();
            match GoalService::new(storage).set(name, amount)? {
                Some(previous) => println!(
                    "Goal '{}' updated: {} -> {}",
                    name,
                    money(previous, symbol),
                    money(amount, symbol)
                ),
                None => println!("Goal '{}' set to {}", name, money(amount, symbol)),
            }
        }

        GoalCommands::Progress => {
            let snapshot = storage.snapshot()?;
            let progress = goals_progress(&snapshot.transactions, &snapshot.goals);
            print!("{}", format_goals_progress(&progress, symbol));
        }
    }

    Ok(())
}
