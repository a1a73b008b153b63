//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod category;
pub mod report;
pub mod transaction;

pub use category::{handle_category_command, CategoryCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
