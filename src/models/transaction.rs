//! Transaction model
//!
//! A single recorded income or expense event. Transactions are created by
//! the entry flow and are never edited or deleted afterwards.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::kind::TransactionKind;
use super::money::Money;

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Income or expense
    pub kind: TransactionKind,

    /// Transaction date
    pub date: NaiveDate,

    /// Amount (never negative; the kind carries the direction)
    pub amount: Money,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Category name; must belong to the categories of `kind`
    pub category: String,
}

impl Transaction {
    /// Create a new transaction without a description
    pub fn new(
        kind: TransactionKind,
        date: NaiveDate,
        amount: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            date,
            amount,
            description: String::new(),
            category: category.into(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this is an expense transaction
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Whether the date falls within the given calendar month
    pub fn falls_in(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }

        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::MissingCategory);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.category,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeAmount(Money),
    MissingCategory,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Amount cannot be negative ({})", amount)
            }
            Self::MissingCategory => write!(f, "A category must be selected"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
