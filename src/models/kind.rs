//! Transaction kind (income or expense)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a transaction brings money in or takes it out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    #[default]
    Income,
    Expense,
}

impl TransactionKind {
    /// Both kinds, income first
    pub const ALL: [TransactionKind; 2] = [TransactionKind::Income, TransactionKind::Expense];

    /// The other kind
    pub fn toggled(self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }

    /// Lowercase name used on the command line and in CSV output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Plural label for headings ("Income", "Expenses")
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expenses",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// Error returned when a string names no transaction kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown transaction type '{}' (use income or expense)", self.0)
    }
}

impl std::error::Error for UnknownKind {}

impl FromStr for TransactionKind {
    type Err = UnknownKind;

    /// Accepts the English names and the hosted schema's labels
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" | "ingreso" => Ok(Self::Income),
            "expense" | "out" | "gasto" => Ok(Self::Expense),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}
