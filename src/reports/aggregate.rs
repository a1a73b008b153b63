//! Monthly aggregation
//!
//! Pure functions over a slice of transactions: restrict to a calendar
//! month, total income against expenses, and break one kind down by
//! category. Nothing here touches the store.

use std::collections::{BTreeMap, BTreeSet};

use chrono::Datelike;

use crate::models::{Money, Transaction, TransactionKind};

/// Income, expense and savings totals for a set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonthlySummary {
    pub total_income: Money,
    pub total_expense: Money,
    /// `total_income - total_expense`; negative when spending exceeds income
    pub net_savings: Money,
}

impl MonthlySummary {
    /// Total for one kind
    pub fn total_for(&self, kind: TransactionKind) -> Money {
        match kind {
            TransactionKind::Income => self.total_income,
            TransactionKind::Expense => self.total_expense,
        }
    }
}

/// Subtotal of one category within a breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
    pub transaction_count: usize,
}

/// Transactions dated within `year`/`month`
///
/// Months outside 1-12 match nothing.
pub fn filter_by_month(transactions: &[Transaction], year: i32, month: u32) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.falls_in(year, month))
        .cloned()
        .collect()
}

/// Sum income and expenses and derive net savings
pub fn summarize(transactions: &[Transaction]) -> MonthlySummary {
    let mut summary = MonthlySummary::default();

    for txn in transactions {
        match txn.kind {
            TransactionKind::Income => summary.total_income += txn.amount,
            TransactionKind::Expense => summary.total_expense += txn.amount,
        }
    }

    summary.net_savings = summary.total_income - summary.total_expense;
    summary
}

/// Per-category totals for `kind`, largest first
///
/// Equal totals are ordered by category name.
pub fn breakdown_by_category(transactions: &[Transaction], kind: TransactionKind) -> Vec<CategoryTotal> {
    let mut grouped: BTreeMap<&str, (Money, usize)> = BTreeMap::new();

    for txn in transactions.iter().filter(|t| t.kind == kind) {
        let entry = grouped
            .entry(txn.category.as_str())
            .or_insert((Money::zero(), 0));
        entry.0 += txn.amount;
        entry.1 += 1;
    }

    let mut totals: Vec<CategoryTotal> = grouped
        .into_iter()
        .map(|(category, (total, transaction_count))| CategoryTotal {
            category: category.to_string(),
            total,
            transaction_count,
        })
        .collect();

    // BTreeMap already yields names in order; a stable sort keeps that for ties
    totals.sort_by(|a, b| b.total.cmp(&a.total));
    totals
}

/// Distinct years that have transactions, newest first
pub fn available_years(transactions: &[Transaction]) -> Vec<i32> {
    let years: BTreeSet<i32> = transactions.iter().map(|t| t.date.year()).collect();
    years.into_iter().rev().collect()
}
