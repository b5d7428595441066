//! Command implementations for the nimrst CLI.
//!
//! - [`generate`] - Run the documentation pipeline over every configured module
//! - [`check`] - Validate the configuration and module sources
//!
//! Each command provides an `execute` function that takes the parsed command
//! arguments and returns the process exit code (fatal errors aside).

pub mod check;
pub mod generate;

pub use check::execute as check_execute;
pub use generate::execute as generate_execute;
