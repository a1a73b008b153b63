//! Category model
//!
//! Categories are reference data: a name tagged with the one transaction
//! kind it may be used with. They are read-only to the entry flow.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::kind::TransactionKind;

/// A named classification restricted to one transaction kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category name (unique within its kind)
    pub name: String,

    /// The kind of transaction this category applies to
    pub kind: TransactionKind,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>, kind: TransactionKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Starter categories seeded into a fresh local store
pub fn default_categories() -> Vec<Category> {
    let income = ["Salary", "Freelance", "Investments", "Gifts", "Other Income"];
    let expense = [
        "Rent",
        "Utilities",
        "Groceries",
        "Food",
        "Transportation",
        "Health",
        "Entertainment",
        "Education",
        "Other Expenses",
    ];

    income
        .iter()
        .map(|name| Category::new(*name, TransactionKind::Income))
        .chain(
            expense
                .iter()
                .map(|name| Category::new(*name, TransactionKind::Expense)),
        )
        .collect()
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
