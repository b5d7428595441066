#![deny(clippy::all)]

//! nimrst CLI library.
//!
//! Command-line front end for the `nimrst-docs` pipeline: configuration
//! loading, `nim jsondoc` invocation, logging, and the `generate` / `check`
//! commands.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exporter;
pub mod logger;
pub mod ui;

pub use config::{DocsConfig, ModuleSpec};
pub use error::{CliError, ConfigError, Result};
pub use exporter::ExporterError;
