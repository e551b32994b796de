//! Filesystem module.
//!
//! Provides:
//! - Archive filename derivation
//! - Output directory management

pub mod paths;

pub use paths::{destination_path, ensure_dir, local_filename};
