//! Transaction CLI commands

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_transaction_history, DisplayOptions};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, Transaction, TransactionKind};
use crate::services::{HistoryFilter, TransactionService};
use crate::store::TransactionStore;

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Record an income or expense
    Add {
        /// Transaction type (income or expense)
        kind: TransactionKind,
        /// Amount (e.g., "150" or "150.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category name (must belong to the chosen type)
        #[arg(short, long)]
        category: String,
        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Number of transactions to show (defaults to the history_limit setting)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Only show this type
        #[arg(short, long)]
        kind: Option<TransactionKind>,
    },
}

/// Handle transaction commands
pub fn handle_transaction_command(
    store: &dyn TransactionStore,
    settings: &Settings,
    cmd: TransactionCommands,
) -> TrackerResult<()> {
    let service = TransactionService::new(store);

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            date,
            description,
        } => {
            let amount = Money::parse(&amount).map_err(|e| TrackerError::Validation(e.to_string()))?;
            let date = match date {
                Some(d) => NaiveDate::parse_from_str(&d, "%Y-%m-%d").map_err(|_| {
                    TrackerError::Validation(format!("Invalid date format: {}. Use YYYY-MM-DD", d))
                })?,
                None => Local::now().date_naive(),
            };

            let txn = Transaction::new(kind, date, amount, category.trim())
                .with_description(description.unwrap_or_default().trim());
            let saved = service.record(txn)?;

            println!(
                "Recorded {} of {} in '{}' on {}",
                saved.kind.as_str(),
                saved.amount.format_with_symbol(&settings.currency_symbol),
                saved.category,
                saved.date.format(&settings.date_format)
            );
        }

        TransactionCommands::List { limit, kind } => {
            let mut filter = HistoryFilter::new().limit(limit.unwrap_or(settings.history_limit));
            if let Some(kind) = kind {
                filter = filter.kind(kind);
            }

            let transactions = service.history(&filter)?;
            let options = DisplayOptions {
                currency_symbol: settings.currency_symbol.clone(),
                date_format: settings.date_format.clone(),
            };
            print!("{}", format_transaction_history(&transactions, &options));
        }
    }

    Ok(())
}
