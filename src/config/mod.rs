//! Configuration module for the wdc-table-downloader.
//!
//! This module handles:
//! - Run modes and their default category selection
//! - Run settings built from CLI arguments
//! - Settings validation

pub mod modes;
pub mod settings;
pub mod validation;

pub use modes::{FailurePolicy, RunMode};
pub use settings::Settings;
pub use validation::{validate_output, validate_settings, validate_source_url};
