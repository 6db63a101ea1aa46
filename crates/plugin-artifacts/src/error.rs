//! Error types for plugin-artifacts

use std::path::PathBuf;

/// Result type for plugin-artifacts operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in plugin-artifacts operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No option has been bound as the artifact base directory for the namespace
    #[error("No artifact directory option bound for namespace '{namespace}'")]
    UnboundArtifactOption { namespace: String },

    /// The bound option resolved to nothing usable as a directory
    #[error("Option '{option}' in namespace '{namespace}' did not resolve to a directory path")]
    MissingArtifactBase { namespace: String, option: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Option registry error from plugin-options
    #[error(transparent)]
    Options(#[from] plugin_options::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
