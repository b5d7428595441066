use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for documentation operations.
pub type Result<T> = std::result::Result<T, DocsError>;

/// Error variants for loading `nim jsondoc` bundles.
#[derive(Debug, Error)]
pub enum DocsError {
    /// The bundle file does not exist.
    #[error("documentation bundle not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Failed to read the bundle file.
    #[error("failed to read bundle '{path}': {error}")]
    Io {
        /// Path to the bundle that caused the error.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        error: std::io::Error,
    },

    /// The bundle was not parseable as jsondoc output.
    #[error("malformed bundle '{path}': {error}")]
    Malformed {
        /// Path to the bundle.
        path: PathBuf,
        /// Underlying JSON parse error.
        #[source]
        error: serde_json::Error,
    },
}
