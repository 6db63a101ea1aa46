//! Directory creation

use crate::{Error, Result};
use std::fs;
use std::path::Path;

/// Create `path` and any missing ancestors.
///
/// An existing directory is not an error, including one created
/// concurrently by another worker. Failures are returned unchanged as
/// [`Error::Io`]; there is no retry.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|e| Error::io(path, e))?;
    tracing::debug!(?path, "Created artifact directory");
    Ok(())
}
