//! CLI commands for reports

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use chrono::{Datelike, Local};
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::models::TransactionKind;
use crate::reports::{available_years, MonthlyReport};
use crate::services::TransactionService;
use crate::store::TransactionStore;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Income, expenses and savings for one month
    Monthly {
        /// Year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Month number 1-12 (defaults to the current month)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// Break down this type by category
        #[arg(long)]
        details: Option<TransactionKind>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the years that have transactions
    Years,
}

/// Handle report commands
pub fn handle_report_command(
    store: &dyn TransactionStore,
    settings: &Settings,
    cmd: ReportCommands,
) -> TrackerResult<()> {
    let service = TransactionService::new(store);

    match cmd {
        ReportCommands::Monthly {
            year,
            month,
            details,
            output,
        } => {
            let today = Local::now().date_naive();
            let year = year.unwrap_or_else(|| today.year());
            let month = month.unwrap_or_else(|| today.month());

            let transactions = service.all()?;
            let report = MonthlyReport::generate(&transactions, year, month, details);

            if let Some(path) = output {
                let file = File::create(&path).map_err(|e| {
                    TrackerError::Io(format!("Failed to create file {}: {}", path.display(), e))
                })?;
                report.export_csv(BufWriter::new(file))?;
                println!("Monthly report exported to: {}", path.display());
            } else {
                print!("{}", report.format_terminal(&settings.currency_symbol));
            }
        }

        ReportCommands::Years => {
            let years = available_years(&service.all()?);
            if years.is_empty() {
                println!("No transactions recorded.");
            }
            for year in years {
                println!("{}", year);
            }
        }
    }

    Ok(())
}
