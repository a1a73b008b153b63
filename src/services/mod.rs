//! Service layer for fintrack
//!
//! Business logic shared by the TUI and the CLI: the Register form, the
//! session state machine and the transaction submission path.

pub mod entry;
pub mod session;
pub mod transaction;

pub use entry::EntryForm;
pub use session::{DrillDown, Interaction, Session};
pub use transaction::{HistoryFilter, TransactionService};
