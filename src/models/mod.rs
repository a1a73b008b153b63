//! Core data models for fintrack
//!
//! Transactions, categories, the income/expense kind and the money type.

pub mod category;
pub mod ids;
pub mod kind;
pub mod money;
pub mod transaction;

pub use category::{default_categories, Category};
pub use ids::TransactionId;
pub use kind::TransactionKind;
pub use money::Money;
pub use transaction::Transaction;
