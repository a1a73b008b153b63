//! Transaction store boundary
//!
//! Three operations make up everything fintrack asks of persistence:
//! insert a transaction, list category names of one kind, and list all
//! transactions newest first. `RestStore` talks to the hosted database;
//! `JsonStore` keeps the same data in local JSON files.

pub mod file_io;
pub mod init;
pub mod local;
pub mod remote;

pub use init::initialize_storage;
pub use local::JsonStore;
pub use remote::RestStore;

use crate::config::paths::TrackerPaths;
use crate::config::secrets::StoreSecrets;
use crate::config::settings::BackendKind;
use crate::error::TrackerResult;
use crate::models::{Transaction, TransactionKind};

/// Persistence operations used by the entry flow and the views
pub trait TransactionStore {
    /// Which backend this store talks to
    fn backend(&self) -> BackendKind;

    /// Persist one transaction
    fn insert_transaction(&self, transaction: &Transaction) -> TrackerResult<()>;

    /// Names of the categories usable with `kind`
    fn list_categories(&self, kind: TransactionKind) -> TrackerResult<Vec<String>>;

    /// Every stored transaction, ordered by date descending
    fn list_transactions(&self) -> TrackerResult<Vec<Transaction>>;
}

/// Open the store for `backend`
///
/// The hosted backend needs its URL and key; if either is missing this
/// fails with a configuration error before anything else happens.
pub fn open_store(
    backend: BackendKind,
    paths: &TrackerPaths,
) -> TrackerResult<Box<dyn TransactionStore>> {
    match backend {
        BackendKind::Remote => {
            let secrets = StoreSecrets::load(paths)?;
            tracing::debug!(url = %secrets.url, "opening hosted store");
            Ok(Box::new(RestStore::new(&secrets)?))
        }
        BackendKind::Local => {
            tracing::debug!(dir = %paths.data_dir().display(), "opening local store");
            if init::needs_initialization(paths) {
                tracing::warn!("local store is not initialized; run `fintrack init`");
            }
            Ok(Box::new(JsonStore::open(paths)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_local_store() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let store = open_store(BackendKind::Local, &paths).unwrap();
        assert_eq!(store.backend(), BackendKind::Local);
        assert!(store.list_transactions().unwrap().is_empty());
    }
}
