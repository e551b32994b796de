//! Pipeline module.
//!
//! This module provides:
//! - The fetch, filter and sink pipeline
//! - Download and record operations
//! - Run statistics

pub mod run;
pub mod state;

pub use run::{download_archives, record_links, run, run_pipeline, BatchOptions};
pub use state::{LinkFailure, RunStats};
