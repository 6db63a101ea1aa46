//! Filesystem and logging fixtures.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tempfile::TempDir;

static GLOBAL_STATE: Mutex<()> = Mutex::new(());

/// Serialises tests that read or reset the process-wide registry and
/// bindings. Hold the guard for the whole test.
pub fn lock_global_state() -> MutexGuard<'static, ()> {
    GLOBAL_STATE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Creates an empty scratch directory that is removed on drop.
///
/// # Panics
/// Panics if the temporary directory cannot be created.
pub fn scratch_dir() -> TempDir {
    TempDir::new().unwrap_or_else(|e| panic!("scratch_dir: failed to create temp dir: {e}"))
}

/// Writes `content` as `pyproject.toml` inside `dir` and returns its path.
///
/// # Panics
/// Panics if the file cannot be written.
pub fn write_project_file(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("pyproject.toml");
    fs::write(&path, content).unwrap_or_else(|e| {
        panic!(
            "write_project_file: failed to write {}: {e}",
            path.display()
        )
    });
    path
}

/// Installs a fmt subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs anything.
/// Honours `RUST_LOG`, defaulting to `debug`.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
