//! Error types for the nimrst CLI.
//!
//! Fatal errors only: anything module-scoped (exporter failures, malformed
//! bundles) is handled inside the pipeline loop and never reaches these
//! types. See [`crate::exporter::ExporterError`] for the module-scoped side.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration loading or validation failed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// An output directory could not be created. Nothing can be generated,
    /// so this aborts the whole run.
    #[error("Failed to create output directory '{}': {error}", .path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        error: std::io::Error,
    },

    /// I/O errors outside the per-module loop.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file doesn't exist at the requested location.
    #[error("Config file not found: {}\n\nHint: create nimrst.config.json or pass --config <path>", .0.display())]
    NotFound(PathBuf),

    /// Config file could not be parsed or has invalid field types.
    #[error("Invalid configuration: {0}\n\nHint: check nimrst.config.json syntax and field types")]
    Invalid(String),

    /// The module list is empty; there is nothing to generate.
    #[error("No modules configured\n\nHint: add entries to \"modules\" in nimrst.config.json")]
    NoModules,

    /// Two modules share a name, which would make their output files and
    /// anchors collide.
    #[error("Duplicate module name '{0}' in configuration")]
    DuplicateModule(String),
}
