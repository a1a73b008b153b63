//! Transaction service
//!
//! The submission path shared by the TUI and the CLI, plus the filtered
//! history listing.

use tracing::debug;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Transaction, TransactionKind};
use crate::store::TransactionStore;

/// Options for filtering the history list
#[derive(Debug, Clone, Default)]
pub struct HistoryFilter {
    /// Only transactions of this kind
    pub kind: Option<TransactionKind>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl HistoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Service for recording and listing transactions
pub struct TransactionService<'a> {
    store: &'a dyn TransactionStore,
}

impl<'a> TransactionService<'a> {
    pub fn new(store: &'a dyn TransactionStore) -> Self {
        Self { store }
    }

    /// Category names available for `kind`
    pub fn categories(&self, kind: TransactionKind) -> TrackerResult<Vec<String>> {
        self.store.list_categories(kind)
    }

    /// Validate and persist a transaction
    ///
    /// The category must be one of the store's categories for the
    /// transaction's kind.
    pub fn record(&self, transaction: Transaction) -> TrackerResult<Transaction> {
        transaction
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        let categories = self.store.list_categories(transaction.kind)?;
        if !categories.iter().any(|c| c == &transaction.category) {
            let other = self.store.list_categories(transaction.kind.toggled())?;
            if !other.iter().any(|c| c == &transaction.category) {
                return Err(TrackerError::category_not_found(&transaction.category));
            }
            return Err(TrackerError::Validation(format!(
                "'{}' is not a category for {}",
                transaction.category,
                transaction.kind.as_str()
            )));
        }

        self.store.insert_transaction(&transaction)?;
        Ok(transaction)
    }

    /// All transactions, newest first
    pub fn all(&self) -> TrackerResult<Vec<Transaction>> {
        self.store.list_transactions()
    }

    /// Transactions matching `filter`, newest first
    pub fn history(&self, filter: &HistoryFilter) -> TrackerResult<Vec<Transaction>> {
        let mut transactions = self.store.list_transactions()?;

        if let Some(kind) = filter.kind {
            transactions.retain(|t| t.kind == kind);
        }
        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }

        debug!(count = transactions.len(), "history listed");
        Ok(transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use crate::models::{Category, Money};
    use crate::store::JsonStore;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, JsonStore) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = JsonStore::open(&paths).unwrap();
        store
            .set_categories(vec![
                Category::new("Salary", TransactionKind::Income),
                Category::new("Rent", TransactionKind::Expense),
                Category::new("Food", TransactionKind::Expense),
            ])
            .unwrap();
        (temp_dir, store)
    }

    fn txn(kind: TransactionKind, day: u32, category: &str) -> Transaction {
        Transaction::new(
            kind,
            NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            Money::from_units(10, 0),
            category,
        )
    }

    #[test]
    fn test_record_valid_transaction() {
        let (_temp, store) = create_test_store();
        let service = TransactionService::new(&store);

        service.record(txn(TransactionKind::Expense, 2, "Rent")).unwrap();
        assert_eq!(service.all().unwrap().len(), 1);
    }

    #[test]
    fn test_record_rejects_category_of_other_kind() {
        let (_temp, store) = create_test_store();
        let service = TransactionService::new(&store);

        let err = service
            .record(txn(TransactionKind::Income, 2, "Rent"))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Validation error: 'Rent' is not a category for income"
        );
        assert!(service.all().unwrap().is_empty());
    }

    #[test]
    fn test_record_rejects_unknown_category() {
        let (_temp, store) = create_test_store();
        let service = TransactionService::new(&store);

        let err = service
            .record(txn(TransactionKind::Expense, 2, "Yachts"))
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Category not found: Yachts");
    }

    #[test]
    fn test_record_rejects_negative_amount() {
        let (_temp, store) = create_test_store();
        let service = TransactionService::new(&store);

        let mut negative = txn(TransactionKind::Expense, 2, "Food");
        negative.amount = Money::from_cents(-100);
        assert!(service.record(negative).unwrap_err().is_validation());
    }

    #[test]
    fn test_history_filter() {
        let (_temp, store) = create_test_store();
        let service = TransactionService::new(&store);

        service.record(txn(TransactionKind::Income, 1, "Salary")).unwrap();
        service.record(txn(TransactionKind::Expense, 2, "Rent")).unwrap();
        service.record(txn(TransactionKind::Expense, 3, "Food")).unwrap();

        let expenses = service
            .history(&HistoryFilter::new().kind(TransactionKind::Expense))
            .unwrap();
        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0].category, "Food");

        let latest = service.history(&HistoryFilter::new().limit(1)).unwrap();
        assert_eq!(latest.len(), 1);
        assert_eq!(latest[0].category, "Food");
    }
}
