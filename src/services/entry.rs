//! Register form input
//!
//! Holds what the user typed and turns it into a `Transaction`.

use chrono::{Local, NaiveDate};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, Transaction, TransactionKind};

/// Date format accepted by the form
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Raw inputs of the Register form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryForm {
    pub kind: TransactionKind,
    pub date: String,
    pub amount: String,
    pub description: String,
    pub category: Option<String>,
}

impl Default for EntryForm {
    fn default() -> Self {
        Self::new(TransactionKind::default())
    }
}

impl EntryForm {
    /// Empty form for `kind`, dated today
    pub fn new(kind: TransactionKind) -> Self {
        Self {
            kind,
            date: Local::now().date_naive().format(DATE_INPUT_FORMAT).to_string(),
            amount: String::new(),
            description: String::new(),
            category: None,
        }
    }

    /// Parse the inputs into a transaction
    pub fn build(&self) -> TrackerResult<Transaction> {
        let date_input = self.date.trim();
        if date_input.is_empty() {
            return Err(TrackerError::Validation("Date is required".into()));
        }
        let date = NaiveDate::parse_from_str(date_input, DATE_INPUT_FORMAT).map_err(|_| {
            TrackerError::Validation(format!(
                "Invalid date '{}' (expected YYYY-MM-DD)",
                date_input
            ))
        })?;

        let amount = if self.amount.trim().is_empty() {
            Money::zero()
        } else {
            Money::parse(&self.amount).map_err(|e| TrackerError::Validation(e.to_string()))?
        };
        if amount.is_negative() {
            return Err(TrackerError::Validation("Amount cannot be negative".into()));
        }

        let category = self
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| TrackerError::Validation("Select a category".into()))?;

        Ok(Transaction::new(self.kind, date, amount, category)
            .with_description(self.description.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> EntryForm {
        EntryForm {
            kind: TransactionKind::Expense,
            date: "2024-05-02".into(),
            amount: "300".into(),
            description: " May rent ".into(),
            category: Some("Rent".into()),
        }
    }

    #[test]
    fn test_new_form_defaults() {
        let form = EntryForm::default();
        assert_eq!(form.kind, TransactionKind::Income);
        assert!(NaiveDate::parse_from_str(&form.date, DATE_INPUT_FORMAT).is_ok());
        assert!(form.category.is_none());
    }

    #[test]
    fn test_build() {
        let txn = filled_form().build().unwrap();
        assert_eq!(txn.kind, TransactionKind::Expense);
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
        assert_eq!(txn.amount, Money::from_units(300, 0));
        assert_eq!(txn.description, "May rent");
        assert_eq!(txn.category, "Rent");
    }

    #[test]
    fn test_empty_amount_is_zero() {
        let mut form = filled_form();
        form.amount = String::new();
        assert_eq!(form.build().unwrap().amount, Money::zero());
    }

    #[test]
    fn test_rejects_bad_input() {
        let mut form = filled_form();
        form.date = "02/05/2024".into();
        assert!(form.build().unwrap_err().is_validation());

        let mut form = filled_form();
        form.date = "  ".into();
        assert!(form.build().is_err());

        let mut form = filled_form();
        form.amount = "-5".into();
        assert!(form.build().is_err());

        let mut form = filled_form();
        form.amount = "abc".into();
        assert!(form.build().is_err());

        let mut form = filled_form();
        form.category = None;
        assert!(form.build().is_err());
    }

    #[test]
    fn test_rejects_non_ascii_and_oversized_amounts() {
        for amount in ["10.5é", "1.5€", "99999999999999999"] {
            let mut form = filled_form();
            form.amount = amount.into();
            let err = form.build().unwrap_err();
            assert!(err.is_validation(), "{} should be rejected", amount);
        }
    }
}
