use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use finance_tracker::cli::{
    handle_add_command, handle_assistant_command, handle_balance_command, handle_budget_command,
    handle_export_command, handle_goal_command, handle_list_command, handle_report_command,
    AddArgs, AssistantCommands, BudgetCommands, ExportCommands, GoalCommands, ListArgs,
    ReportCommands,
};
use finance_tracker::config::{paths::TrackerPaths, settings::Settings};
use finance_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Terminal personal finance tracker",
    long_about = "Record income and expenses, set monthly budgets and savings goals, \
                  and get spending reports, a financial health score and \
                  recommendations from the command line."
)]
struct Cli {
    /// Evaluate as of this date (YYYY-MM-DD) instead of today
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record an expense or income
    Add(AddArgs),

    /// List transactions, newest first
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show lifetime income, expenses and balance
    Balance,

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Spending, income, savings, health and monthly reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Daily check, recommendations, alerts and savings opportunities
    #[command(subcommand)]
    Assistant(AssistantCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Export data as CSV, JSON or YAML
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show recent changes from the audit log
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        count: usize,
    },

    /// Write default settings to the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone())?;

    match cli.command {
        Some(Commands::Add(args)) => handle_add_command(&storage, &settings, today, args)?,
        Some(Commands::List(args)) => handle_list_command(&storage, &settings, today, args)?,
        Some(Commands::Balance) => handle_balance_command(&storage, &settings)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, &settings, today, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(&storage, &settings, today, cmd)?,
        Some(Commands::Assistant(cmd)) => {
            handle_assistant_command(&storage, &settings, today, cmd)?
        }
        Some(Commands::Goal(cmd)) => handle_goal_command(&storage, &settings, cmd)?,
        Some(Commands::Export(cmd)) => handle_export_command(&storage, cmd)?,
        Some(Commands::Audit { count }) => {
            let entries = storage.audit().read_recent(count)?;
            if entries.is_empty() {
                println!("No audit entries yet.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Initialized finance tracker at: {}", paths.base_dir().display());
            println!();
            println!("Record your first transaction with:");
            println!("  fintrack add expense 12.50 --category Food --description lunch");
        }
        Some(Commands::Config) => {
            println!("Finance Tracker Configuration");
            println!("=============================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Data directory:    {}", paths.data_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Audit log:         {}", paths.audit_log().display());
            println!("Initialized:       {}", storage.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Recent days:      {}", settings.recent_days);
            println!("  Top transactions: {}", settings.top_transactions);
        }
        None => {
            println!("fintrack - Terminal personal finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
        }
    }

    Ok(())
}
