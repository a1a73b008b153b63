//! Local JSON-file store
//!
//! Categories live in `categories.json` and transactions in
//! `transactions.json`. Both are loaded into memory on open; every insert
//! rewrites `transactions.json` atomically.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::paths::TrackerPaths;
use crate::config::settings::BackendKind;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, Transaction, TransactionId, TransactionKind};

use super::file_io::{read_json, write_json_atomic};
use super::TransactionStore;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CategoryData {
    categories: Vec<Category>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TransactionData {
    transactions: Vec<StoredTransaction>,
}

/// A transaction as persisted locally, with its identity and insert time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredTransaction {
    pub id: TransactionId,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub transaction: Transaction,
}

impl StoredTransaction {
    fn new(transaction: Transaction) -> Self {
        Self {
            id: TransactionId::new(),
            created_at: Utc::now(),
            transaction,
        }
    }
}

fn lock_error(e: impl std::fmt::Display) -> TrackerError {
    TrackerError::Storage(format!("Failed to acquire lock: {}", e))
}

/// Transaction store backed by JSON files in the data directory
pub struct JsonStore {
    categories_path: PathBuf,
    transactions_path: PathBuf,
    categories: RwLock<Vec<Category>>,
    transactions: RwLock<HashMap<TransactionId, StoredTransaction>>,
}

impl JsonStore {
    /// Create an empty store over the files in `paths` without reading them
    pub fn new(paths: &TrackerPaths) -> Self {
        Self {
            categories_path: paths.categories_file(),
            transactions_path: paths.transactions_file(),
            categories: RwLock::new(Vec::new()),
            transactions: RwLock::new(HashMap::new()),
        }
    }

    /// Create the store and load whatever is on disk
    pub fn open(paths: &TrackerPaths) -> TrackerResult<Self> {
        let store = Self::new(paths);
        store.load()?;
        Ok(store)
    }

    /// Reload both files from disk
    pub fn load(&self) -> TrackerResult<()> {
        let category_data: CategoryData = read_json(&self.categories_path)?;
        let transaction_data: TransactionData = read_json(&self.transactions_path)?;

        let mut categories = self.categories.write().map_err(lock_error)?;
        let mut transactions = self.transactions.write().map_err(lock_error)?;

        *categories = category_data.categories;
        transactions.clear();
        for stored in transaction_data.transactions {
            transactions.insert(stored.id, stored);
        }

        debug!(
            categories = categories.len(),
            transactions = transactions.len(),
            "loaded local store"
        );
        Ok(())
    }

    /// Whether `categories.json` has been written
    pub fn has_categories_file(&self) -> bool {
        self.categories_path.exists()
    }

    /// Replace the category set and persist it
    pub fn set_categories(&self, new_categories: Vec<Category>) -> TrackerResult<()> {
        for category in &new_categories {
            category
                .validate()
                .map_err(|e| TrackerError::Validation(e.to_string()))?;
        }

        let mut categories = self.categories.write().map_err(lock_error)?;
        *categories = new_categories;
        write_json_atomic(
            &self.categories_path,
            &CategoryData {
                categories: categories.clone(),
            },
        )
    }

    /// All stored transactions with their identity, newest first
    pub fn stored_transactions(&self) -> TrackerResult<Vec<StoredTransaction>> {
        let transactions = self.transactions.read().map_err(lock_error)?;
        let mut stored: Vec<_> = transactions.values().cloned().collect();
        sort_newest_first(&mut stored);
        Ok(stored)
    }

    fn save_transactions(&self, data: &HashMap<TransactionId, StoredTransaction>) -> TrackerResult<()> {
        let mut transactions: Vec<_> = data.values().cloned().collect();
        sort_newest_first(&mut transactions);
        write_json_atomic(&self.transactions_path, &TransactionData { transactions })
    }
}

fn sort_newest_first(transactions: &mut [StoredTransaction]) {
    transactions.sort_by(|a, b| {
        b.transaction
            .date
            .cmp(&a.transaction.date)
            .then(b.created_at.cmp(&a.created_at))
    });
}

impl TransactionStore for JsonStore {
    fn backend(&self) -> BackendKind {
        BackendKind::Local
    }

    fn insert_transaction(&self, transaction: &Transaction) -> TrackerResult<()> {
        let stored = StoredTransaction::new(transaction.clone());
        let id = stored.id;

        let mut transactions = self.transactions.write().map_err(lock_error)?;
        transactions.insert(id, stored);

        if let Err(e) = self.save_transactions(&transactions) {
            transactions.remove(&id);
            return Err(e);
        }

        info!(%id, kind = %transaction.kind, category = %transaction.category, "transaction saved");
        Ok(())
    }

    fn list_categories(&self, kind: TransactionKind) -> TrackerResult<Vec<String>> {
        let categories = self.categories.read().map_err(lock_error)?;
        Ok(categories
            .iter()
            .filter(|c| c.kind == kind)
            .map(|c| c.name.clone())
            .collect())
    }

    fn list_transactions(&self) -> TrackerResult<Vec<Transaction>> {
        Ok(self
            .stored_transactions()?
            .into_iter()
            .map(|stored| stored.transaction)
            .collect())
    }
}
