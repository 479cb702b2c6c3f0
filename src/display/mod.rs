//! Display formatting for terminal output
//!
//! Turns analytics results and records into text. Nothing here recomputes a
//! figure; it only lays out what it is given.

pub mod assistant;
pub mod budget;
pub mod format;
pub mod transaction;

pub use assistant::{
    format_alert, format_alerts, format_daily_check, format_goals_progress,
    format_recommendations, format_savings_opportunities,
};
pub use budget::{format_budget_summary, format_budget_table};
pub use format::{format_bar, format_percentage, money, section};
pub use transaction::{format_transaction_line, format_transaction_table};
