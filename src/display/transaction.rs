//! Transaction display formatting
//!
//! Renders the history list for terminal output.

use crate::models::Transaction;

/// Formatting preferences taken from the user's settings
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    pub currency_symbol: String,
    pub date_format: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            currency_symbol: "S/".into(),
            date_format: "%Y-%m-%d".into(),
        }
    }
}

/// Format a single transaction as a history row
pub fn format_transaction_row(txn: &Transaction, options: &DisplayOptions) -> String {
    let description = if txn.description.is_empty() {
        "-"
    } else {
        txn.description.as_str()
    };

    format!(
        "{:10} {:8} {:18} {:>14}  {}",
        txn.date.format(&options.date_format).to_string(),
        txn.kind.to_string(),
        truncate(&txn.category, 18),
        txn.amount.format_with_symbol(&options.currency_symbol),
        truncate(description, 30).trim_end()
    )
}

/// Format a list of transactions as the history table
pub fn format_transaction_history(transactions: &[Transaction], options: &DisplayOptions) -> String {
    if transactions.is_empty() {
        return "No transactions recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:8} {:18} {:>14}  {}\n",
        "Date", "Type", "Category", "Amount", "Description"
    ));
    output.push_str(&"-".repeat(80));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, options));
        output.push('\n');
    }

    output.push_str(&format!("\n{} transaction(s)\n", transactions.len()));
    output
}

/// Pad or cut `s` to exactly `max_len` characters
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
