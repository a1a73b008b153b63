//! Application state for the TUI
//!
//! `App` owns everything the views render: the session, the Register form,
//! the Monthly Summary pickers and the records last fetched from the store.
//! Rendering only reads this state; store calls happen in the refresh and
//! save methods below.

use chrono::{Datelike, Local};
use tracing::warn;

use crate::config::settings::Settings;
use crate::error::TrackerError;
use crate::models::{Transaction, TransactionKind};
use crate::reports::{available_years, MonthlyReport};
use crate::services::entry::DATE_INPUT_FORMAT;
use crate::services::{EntryForm, Interaction, Session, TransactionService};
use crate::store::TransactionStore;

use super::widgets::{Notification, TextInput};

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Register,
    History,
    MonthlySummary,
}

impl ActiveView {
    /// Menu order
    pub const ALL: [ActiveView; 3] = [
        ActiveView::Register,
        ActiveView::History,
        ActiveView::MonthlySummary,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Register => "Register",
            Self::History => "History",
            Self::MonthlySummary => "Monthly Summary",
        }
    }
}

/// Field of the Register form that has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegisterField {
    #[default]
    Kind,
    Date,
    Amount,
    Description,
    Category,
    Save,
}

impl RegisterField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Kind => Self::Date,
            Self::Date => Self::Amount,
            Self::Amount => Self::Description,
            Self::Description => Self::Category,
            Self::Category => Self::Save,
            Self::Save => Self::Kind,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Kind => Self::Save,
            Self::Date => Self::Kind,
            Self::Amount => Self::Date,
            Self::Description => Self::Amount,
            Self::Category => Self::Description,
            Self::Save => Self::Category,
        }
    }

    /// Whether typed characters go into this field
    pub fn is_text(self) -> bool {
        matches!(self, Self::Date | Self::Amount | Self::Description)
    }
}

/// State of the Register form
#[derive(Debug, Clone)]
pub struct RegisterState {
    pub focused: RegisterField,
    pub date_input: TextInput,
    pub amount_input: TextInput,
    pub description_input: TextInput,
    /// Categories of the session's entry kind
    pub categories: Vec<String>,
    pub category_index: usize,
}

impl RegisterState {
    pub fn new() -> Self {
        let defaults = EntryForm::default();
        let mut state = Self {
            focused: RegisterField::default(),
            date_input: TextInput::new()
                .label("Date")
                .placeholder("YYYY-MM-DD")
                .content(defaults.date),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            description_input: TextInput::new()
                .label("Description")
                .placeholder("Optional"),
            categories: Vec::new(),
            category_index: 0,
        };
        state.sync_focus();
        state
    }

    pub fn set_focus(&mut self, field: RegisterField) {
        self.focused = field;
        self.sync_focus();
    }

    fn sync_focus(&mut self) {
        self.date_input.focused = self.focused == RegisterField::Date;
        self.amount_input.focused = self.focused == RegisterField::Amount;
        self.description_input.focused = self.focused == RegisterField::Description;
    }

    /// The text input with focus, if any
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused {
            RegisterField::Date => Some(&mut self.date_input),
            RegisterField::Amount => Some(&mut self.amount_input),
            RegisterField::Description => Some(&mut self.description_input),
            _ => None,
        }
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.categories.get(self.category_index).map(String::as_str)
    }

    pub fn next_category(&mut self) {
        if !self.categories.is_empty() {
            self.category_index = (self.category_index + 1) % self.categories.len();
        }
    }

    pub fn prev_category(&mut self) {
        if !self.categories.is_empty() {
            self.category_index =
                (self.category_index + self.categories.len() - 1) % self.categories.len();
        }
    }

    /// Snapshot the inputs as an entry form of `kind`
    pub fn to_form(&self, kind: TransactionKind) -> EntryForm {
        EntryForm {
            kind,
            date: self.date_input.value().to_string(),
            amount: self.amount_input.value().to_string(),
            description: self.description_input.value().to_string(),
            category: self.selected_category().map(String::from),
        }
    }
}

impl Default for RegisterState {
    fn default() -> Self {
        Self::new()
    }
}

/// Year and month pickers of the Monthly Summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryState {
    /// Distinct years in the store, newest first
    pub years: Vec<i32>,
    pub year_index: usize,
    /// 1-12
    pub month: u32,
}

impl SummaryState {
    pub fn new() -> Self {
        Self {
            years: Vec::new(),
            year_index: 0,
            month: Local::now().month(),
        }
    }

    pub fn selected_year(&self) -> Option<i32> {
        self.years.get(self.year_index).copied()
    }

    /// Replace the year options, keeping the selected year when it still exists
    pub fn set_years(&mut self, years: Vec<i32>) {
        let current = self.selected_year();
        self.year_index = current
            .and_then(|y| years.iter().position(|&candidate| candidate == y))
            .unwrap_or(0);
        self.years = years;
    }

    pub fn next_month(&mut self) {
        self.month = if self.month >= 12 { 1 } else { self.month + 1 };
    }

    pub fn prev_month(&mut self) {
        self.month = if self.month <= 1 { 12 } else { self.month - 1 };
    }

    /// Move toward older years
    pub fn older_year(&mut self) {
        if self.year_index + 1 < self.years.len() {
            self.year_index += 1;
        }
    }

    /// Move toward newer years
    pub fn newer_year(&mut self) {
        self.year_index = self.year_index.saturating_sub(1);
    }
}

impl Default for SummaryState {
    fn default() -> Self {
        Self::new()
    }
}

/// Main application state
pub struct App<'a> {
    pub store: &'a dyn TransactionStore,
    pub settings: &'a Settings,
    pub should_quit: bool,
    pub active_view: ActiveView,
    pub session: Session,
    pub register: RegisterState,
    pub summary: SummaryState,
    /// Transactions as last fetched, newest first
    pub transactions: Vec<Transaction>,
    /// Selected row in the History table
    pub history_index: usize,
    pub notification: Option<Notification>,
}

impl<'a> App<'a> {
    pub fn new(store: &'a dyn TransactionStore, settings: &'a Settings) -> Self {
        Self {
            store,
            settings,
            should_quit: false,
            active_view: ActiveView::default(),
            session: Session::new(),
            register: RegisterState::new(),
            summary: SummaryState::new(),
            transactions: Vec::new(),
            history_index: 0,
            notification: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    pub fn notify_error(&mut self, error: &TrackerError) {
        warn!(%error, "interaction failed");
        self.notify(Notification::error(error.to_string()));
    }

    /// Drop the notification once it has been shown long enough
    pub fn expire_notification(&mut self) {
        if self.notification.as_ref().is_some_and(Notification::is_expired) {
            self.notification = None;
        }
    }

    /// Switch to a different view and fetch what it shows
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
        self.refresh();
    }

    /// Re-fetch the data of the active view
    pub fn refresh(&mut self) {
        match self.active_view {
            ActiveView::Register => self.refresh_categories(),
            ActiveView::History | ActiveView::MonthlySummary => self.refresh_transactions(),
        }
    }

    /// Load the categories of the session's entry kind
    pub fn refresh_categories(&mut self) {
        match self.store.list_categories(self.session.entry_kind) {
            Ok(categories) => {
                if categories.is_empty() {
                    self.notify(Notification::info(format!(
                        "No {} categories available",
                        self.session.entry_kind.as_str()
                    )));
                }
                self.register.categories = categories;
                self.register.category_index = 0;
            }
            Err(e) => {
                self.register.categories.clear();
                self.register.category_index = 0;
                self.notify_error(&e);
            }
        }
    }

    /// Load all transactions and the year options derived from them
    pub fn refresh_transactions(&mut self) {
        match self.store.list_transactions() {
            Ok(transactions) => {
                self.summary.set_years(available_years(&transactions));
                self.transactions = transactions;
                self.history_index = self
                    .history_index
                    .min(self.transactions.len().saturating_sub(1));
            }
            Err(e) => self.notify_error(&e),
        }
    }

    /// Apply a session interaction, reloading categories if the entry kind changed
    pub fn interact(&mut self, interaction: Interaction) {
        let previous = self.session;
        self.session = self.session.apply(interaction);

        if self.session.entry_kind != previous.entry_kind {
            self.refresh_categories();
        }
    }

    /// Submit the Register form
    pub fn save_entry(&mut self) {
        if self.register.categories.is_empty() {
            self.notify(Notification::info(
                "No category available for this type; nothing saved",
            ));
            return;
        }

        let form = self.register.to_form(self.session.entry_kind);
        let result = form
            .build()
            .and_then(|txn| TransactionService::new(self.store).record(txn));

        match result {
            Ok(saved) => {
                self.notify(Notification::success(format!(
                    "Saved {} of {} ({})",
                    saved.kind.as_str(),
                    saved.amount.format_with_symbol(&self.settings.currency_symbol),
                    saved.category
                )));
                self.register.amount_input.clear();
                self.register.description_input.clear();
                self.refresh_transactions();
            }
            Err(e) => self.notify_error(&e),
        }
    }

    /// Reset the date field to today
    pub fn reset_date(&mut self) {
        let today = Local::now().date_naive();
        self.register
            .date_input
            .set_value(today.format(DATE_INPUT_FORMAT).to_string());
    }

    /// Monthly Summary for the picked period, if any year is available
    pub fn monthly_report(&self) -> Option<MonthlyReport> {
        let year = self.summary.selected_year()?;
        Some(MonthlyReport::generate(
            &self.transactions,
            year,
            self.summary.month,
            self.session.drill_down.detail_kind(),
        ))
    }

    pub fn history_down(&mut self) {
        if self.history_index + 1 < self.transactions.len() {
            self.history_index += 1;
        }
    }

    pub fn history_up(&mut self) {
        self.history_index = self.history_index.saturating_sub(1);
    }
}
