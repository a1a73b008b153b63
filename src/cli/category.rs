//! Category CLI commands
//!
//! Categories are read-only here; the local store is seeded by `init`.

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::TrackerResult;
use crate::models::TransactionKind;
use crate::services::TransactionService;
use crate::store::TransactionStore;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List categories grouped by type
    List {
        /// Only list categories of this type
        #[arg(short, long)]
        kind: Option<TransactionKind>,
    },
}

/// Handle category commands
pub fn handle_category_command(
    store: &dyn TransactionStore,
    cmd: CategoryCommands,
) -> TrackerResult<()> {
    let service = TransactionService::new(store);

    match cmd {
        CategoryCommands::List { kind } => {
            let kinds: Vec<TransactionKind> = match kind {
                Some(kind) => vec![kind],
                None => TransactionKind::ALL.to_vec(),
            };

            let groups = kinds
                .into_iter()
                .map(|kind| service.categories(kind).map(|names| (kind, names)))
                .collect::<TrackerResult<Vec<_>>>()?;

            print!("{}", format_category_list(&groups));
        }
    }

    Ok(())
}
