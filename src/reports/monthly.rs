//! Monthly Summary Report
//!
//! Bundles one month's totals and an optional category drill-down, and
//! renders them for the terminal or as CSV.

use std::io::Write;

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, Transaction, TransactionKind};

use super::aggregate::{breakdown_by_category, filter_by_month, summarize, CategoryTotal, MonthlySummary};

const BAR_WIDTH: usize = 30;

/// Category breakdown for the kind the user drilled into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDetail {
    pub kind: TransactionKind,
    pub categories: Vec<CategoryTotal>,
}

/// Summary of one calendar month
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    pub year: i32,
    pub month: u32,
    /// Number of transactions dated in the month
    pub transaction_count: usize,
    pub income_count: usize,
    pub expense_count: usize,
    pub summary: MonthlySummary,
    pub detail: Option<ReportDetail>,
}

impl MonthlyReport {
    /// Generate the report for `year`/`month` from the full transaction list
    pub fn generate(
        transactions: &[Transaction],
        year: i32,
        month: u32,
        detail: Option<TransactionKind>,
    ) -> Self {
        let in_month = filter_by_month(transactions, year, month);
        let summary = summarize(&in_month);
        let income_count = in_month.iter().filter(|t| t.is_income()).count();
        let detail = detail.map(|kind| ReportDetail {
            kind,
            categories: breakdown_by_category(&in_month, kind),
        });

        Self {
            year,
            month,
            transaction_count: in_month.len(),
            income_count,
            expense_count: in_month.len() - income_count,
            summary,
            detail,
        }
    }

    /// Whether the month has no transactions at all
    pub fn is_empty(&self) -> bool {
        self.transaction_count == 0
    }

    /// Number of transactions of `kind` in the month
    pub fn count_for(&self, kind: TransactionKind) -> usize {
        match kind {
            TransactionKind::Income => self.income_count,
            TransactionKind::Expense => self.expense_count,
        }
    }

    /// Month heading, e.g. "May 2024"
    pub fn period_label(&self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(first) => first.format("%B %Y").to_string(),
            None => format!("{}-{:02}", self.year, self.month),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Monthly Summary: {}\n", self.period_label()));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.is_empty() {
            output.push_str("No transactions for this month.\n");
            return output;
        }

        output.push_str(&format!(
            "Net savings: {}\n\n",
            self.summary.net_savings.format_with_symbol(currency)
        ));

        let max = self
            .summary
            .total_income
            .max(self.summary.total_expense)
            .as_decimal();
        for kind in TransactionKind::ALL {
            let total = self.summary.total_for(kind);
            output.push_str(&format!(
                "{:<10} {:>16}  {}\n",
                kind.plural(),
                total.format_with_symbol(currency),
                text_bar(total.as_decimal(), max, BAR_WIDTH)
            ));
        }
        output.push_str(&format!("\nTransactions: {}\n", self.transaction_count));

        if let Some(detail) = &self.detail {
            output.push('\n');
            output.push_str(&format!("{} by category\n", detail.kind.plural()));
            output.push_str(&"-".repeat(60));
            output.push('\n');

            if detail.categories.is_empty() {
                output.push_str(&format!(
                    "No {} recorded this month.\n",
                    detail.kind.plural().to_lowercase()
                ));
            } else {
                let max = detail
                    .categories
                    .first()
                    .map(|c| c.total.as_decimal())
                    .unwrap_or(0.0);
                for category in &detail.categories {
                    output.push_str(&format!(
                        "{:<20} {:>16}  {}\n",
                        category.category,
                        category.total.format_with_symbol(currency),
                        text_bar(category.total.as_decimal(), max, BAR_WIDTH)
                    ));
                }
            }
        }

        output
    }

    /// Export the report to CSV format
    ///
    /// One row per kind total, the net savings row, then one row per
    /// category of the drill-down.
    pub fn export_csv<W: Write>(&self, writer: W) -> TrackerResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        let period = format!("{}-{:02}", self.year, self.month);

        csv.write_record(["Period", "Section", "Kind", "Category", "Amount", "Transactions"])
            .map_err(export_error)?;

        for kind in TransactionKind::ALL {
            let amount = decimal(self.summary.total_for(kind));
            let count = self.count_for(kind).to_string();
            csv.write_record([
                period.as_str(),
                "total",
                kind.as_str(),
                "",
                amount.as_str(),
                count.as_str(),
            ])
            .map_err(export_error)?;
        }

        let net = decimal(self.summary.net_savings);
        let count = self.transaction_count.to_string();
        csv.write_record([
            period.as_str(),
            "net_savings",
            "",
            "",
            net.as_str(),
            count.as_str(),
        ])
        .map_err(export_error)?;

        if let Some(detail) = &self.detail {
            for category in &detail.categories {
                let amount = decimal(category.total);
                let count = category.transaction_count.to_string();
                csv.write_record([
                    period.as_str(),
                    "category",
                    detail.kind.as_str(),
                    category.category.as_str(),
                    amount.as_str(),
                    count.as_str(),
                ])
                .map_err(export_error)?;
            }
        }

        csv.flush()?;
        Ok(())
    }
}

fn decimal(amount: Money) -> String {
    format!("{:.2}", amount.as_decimal())
}

fn export_error(e: csv::Error) -> TrackerError {
    TrackerError::Io(format!("Failed to write CSV: {}", e))
}

/// Proportional text bar, e.g. `██████░░░░`
pub fn text_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
