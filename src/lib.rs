//! fintrack - Personal finance tracker for income and expenses
//!
//! This library provides the core of the fintrack application: recording
//! income and expense transactions against categories, listing them newest
//! first, and summarizing a month with totals, net savings and a breakdown
//! by category.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths, settings and store credentials
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, money)
//! - `store`: The transaction store boundary with hosted and local backends
//! - `reports`: Monthly aggregation and report output
//! - `services`: Entry form, session state and transaction submission
//! - `cli`, `display`: Command-line interface and its text output
//! - `tui`: Interactive terminal interface
//! - `logging`: File-based tracing setup
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::config::{paths::TrackerPaths, settings::Settings};
//! use fintrack::reports::MonthlyReport;
//! use fintrack::store::open_store;
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = open_store(settings.backend, &paths)?;
//! let report = MonthlyReport::generate(&store.list_transactions()?, 2024, 5, None);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod store;
pub mod tui;

pub use error::{TrackerError, TrackerResult};
