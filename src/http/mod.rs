//! HTTP module.

pub mod client;

pub use client::PageClient;
