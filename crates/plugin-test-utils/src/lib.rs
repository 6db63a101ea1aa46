//! Shared test utilities for the plugin-utils workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`parser`] — [`RecordingParser`], a host registration surface that records calls
//! - [`fixtures`] — scratch directories, project files, global-state lock, tracing setup
//! - [`capture`] — [`capture_events`], for asserting on emitted diagnostics

pub mod capture;
pub mod fixtures;
pub mod parser;

pub use capture::{CapturedEvent, capture_events};
pub use fixtures::{init_tracing, lock_global_state, scratch_dir, write_project_file};
pub use parser::RecordingParser;
pub use tracing::Level;
