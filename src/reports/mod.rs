//! Reports for fintrack
//!
//! Month filtering and totals live in `aggregate`; `monthly` packages them
//! into the Monthly Summary shown by the TUI and the CLI.

pub mod aggregate;
pub mod monthly;

pub use aggregate::{
    available_years, breakdown_by_category, filter_by_month, summarize, CategoryTotal,
    MonthlySummary,
};
pub use monthly::{MonthlyReport, ReportDetail};
