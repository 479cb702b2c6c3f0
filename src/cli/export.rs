//! CLI commands for data export
//!
//! Each format writes to `--output` when given, otherwise to stdout.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Subcommand;
use tracing::info;

use crate::error::{TrackerError, TrackerResult};
use crate::export::{export_full_json, export_full_yaml, export_transactions_csv};
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export transactions to CSV
    Csv {
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export transactions, budgets and goals to JSON
    Json {
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export transactions, budgets and goals to YAML
    Yaml {
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> TrackerResult<()> {
    let snapshot = storage.snapshot()?;

    match cmd {
        ExportCommands::Csv { output } => {
            if snapshot.transactions.is_empty() {
                eprintln!("No transactions to export.");
            }
            let count = with_writer(output.as_deref(), |w| {
                export_transactions_csv(&snapshot.transactions, w)
            })?;
            if let Some(path) = output {
                println!("Exported {} transactions to: {}", count, path.display());
            }
        }

        ExportCommands::Json { output } => {
            if snapshot.is_empty() {
                eprintln!("No data to export.");
            }
            with_writer(output.as_deref(), |w| export_full_json(&snapshot, w))?;
            if let Some(path) = output {
                println!("Data exported to: {}", path.display());
            }
        }

        ExportCommands::Yaml { output } => {
            if snapshot.is_empty() {
                eprintln!("No data to export.");
            }
            with_writer(output.as_deref(), |w| export_full_yaml(&snapshot, w))?;
            if let Some(path) = output {
                println!("Data exported to: {}", path.display());
            }
        }
    }

    Ok(())
}

/// Run `export` against the output file, or stdout when there is none
fn with_writer<T>(
    output: Option<&Path>,
    export: impl FnOnce(&mut dyn Write) -> TrackerResult<T>,
) -> TrackerResult<T> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                TrackerError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            let result = export(&mut writer)?;
            writer
                .flush()
                .map_err(|e| TrackerError::Export(e.to_string()))?;
            info!(path = %path.display(), "export written");
            Ok(result)
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            let result = export(&mut writer)?;
            writer
                .flush()
                .map_err(|e| TrackerError::Export(e.to_string()))?;
            Ok(result)
        }
    }
}
