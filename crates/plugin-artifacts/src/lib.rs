//! Per-test artifact directories for test-framework plugins
//!
//! A plugin binds one of its declared options (see [`plugin_options`]) as
//! the base directory for artifacts. Each test then gets its own directory
//! under that base, named by the sanitized test nodeid:
//!
//! ```text
//! <resolved base dir>/<sanitize(nodeid)>/
//! ```
//!
//! Directories are created on demand, with any missing ancestors.

pub mod bindings;
pub mod error;
pub mod global;
pub mod io;
pub mod item;
pub mod sanitize;

pub use bindings::ArtifactBindings;
pub use error::{Error, Result};
pub use io::ensure_dir;
pub use item::{TestId, TestItem};
pub use sanitize::{PLACEHOLDER_SEGMENT, sanitize};
