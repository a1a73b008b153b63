//! Interactive session state
//!
//! Two values survive between interactions: the transaction kind selected
//! in the Register form, and which kind the Monthly Summary is drilled
//! into. Handlers never mutate them in place; each interaction produces
//! the next `Session`.

use crate::models::TransactionKind;

/// Drill-down selection on the Monthly Summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrillDown {
    #[default]
    NoSelection,
    ShowingIncome,
    ShowingExpense,
}

impl DrillDown {
    /// The kind whose category breakdown should be shown, if any
    pub fn detail_kind(self) -> Option<TransactionKind> {
        match self {
            Self::NoSelection => None,
            Self::ShowingIncome => Some(TransactionKind::Income),
            Self::ShowingExpense => Some(TransactionKind::Expense),
        }
    }

    fn showing(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Income => Self::ShowingIncome,
            TransactionKind::Expense => Self::ShowingExpense,
        }
    }
}

/// A user action that changes session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// Pick the Register form's transaction kind
    SelectKind(TransactionKind),
    /// Flip the Register form's transaction kind
    ToggleKind,
    /// "Show income details" / "Show expense details"
    ShowDetails(TransactionKind),
}

/// State carried across interactions for the lifetime of the program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    /// Kind used by the Register form; starts as Income
    pub entry_kind: TransactionKind,
    pub drill_down: DrillDown,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the session that follows `interaction`
    pub fn apply(self, interaction: Interaction) -> Session {
        match interaction {
            Interaction::SelectKind(kind) => Session {
                entry_kind: kind,
                ..self
            },
            Interaction::ToggleKind => Session {
                entry_kind: self.entry_kind.toggled(),
                ..self
            },
            Interaction::ShowDetails(kind) => Session {
                drill_down: DrillDown::showing(kind),
                ..self
            },
        }
    }
}
