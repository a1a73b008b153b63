//! Configuration module for fintrack
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Store credentials

pub mod paths;
pub mod secrets;
pub mod settings;

pub use paths::TrackerPaths;
pub use secrets::StoreSecrets;
pub use settings::{BackendKind, Settings};
