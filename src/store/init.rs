//! First-run setup
//!
//! Creates the directory layout and settings file, and seeds the local
//! store with starter categories when it has none.

use tracing::info;

use crate::config::paths::TrackerPaths;
use crate::config::settings::Settings;
use crate::error::TrackerResult;
use crate::models::default_categories;

use super::local::JsonStore;

/// What `initialize_storage` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitOutcome {
    pub created_settings: bool,
    pub seeded_categories: usize,
}

/// Initialize fintrack's directories, settings and local categories
///
/// Safe to run repeatedly; existing settings and categories are left alone.
pub fn initialize_storage(paths: &TrackerPaths) -> TrackerResult<InitOutcome> {
    paths.ensure_directories()?;

    let created_settings = !paths.settings_file().exists();
    if created_settings {
        Settings::default().save(paths)?;
    }

    let store = JsonStore::open(paths)?;
    let mut seeded_categories = 0;
    if !store.has_categories_file() {
        let categories = default_categories();
        seeded_categories = categories.len();
        store.set_categories(categories)?;
    }

    info!(created_settings, seeded_categories, "storage initialized");
    Ok(InitOutcome {
        created_settings,
        seeded_categories,
    })
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &TrackerPaths) -> bool {
    !paths.is_initialized() || !paths.categories_file().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use crate::store::TransactionStore;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_seeds_categories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        assert!(needs_initialization(&paths));

        let outcome = initialize_storage(&paths).unwrap();
        assert!(outcome.created_settings);
        assert_eq!(outcome.seeded_categories, default_categories().len());
        assert!(!needs_initialization(&paths));

        let store = JsonStore::open(&paths).unwrap();
        let income = store.list_categories(TransactionKind::Income).unwrap();
        assert!(income.contains(&"Salary".to_string()));
        assert!(!income.contains(&"Rent".to_string()));
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();
        let second = initialize_storage(&paths).unwrap();
        assert_eq!(
            second,
            InitOutcome {
                created_settings: false,
                seeded_categories: 0
            }
        );
    }
}
