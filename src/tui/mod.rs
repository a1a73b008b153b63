//! Terminal User Interface module
//!
//! An interactive front end built on ratatui with three views: Register
//! for entering transactions, History for browsing them, and Monthly
//! Summary for totals and category breakdowns.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
