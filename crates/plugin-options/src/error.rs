//! Error types for plugin-options

use std::path::PathBuf;

/// Result type for plugin-options operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in plugin-options operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An override, resolution, or binding named an option that was never declared
    #[error("Unknown option '{name}' in namespace '{namespace}'")]
    UnknownOption { namespace: String, name: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse project file {path}: {message}")]
    ProjectFileParse { path: PathBuf, message: String },
}

impl Error {
    pub fn unknown_option(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnknownOption {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
