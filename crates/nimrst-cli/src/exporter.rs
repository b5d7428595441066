//! `nim jsondoc` subprocess invocation.
//!
//! Success requires both a zero exit status and the destination file
//! existing; everything else is a module-level failure that the pipeline
//! records and skips past.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Output, Stdio};
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::debug;

/// Longest stderr excerpt attached to a failure report.
const STDERR_EXCERPT_CHARS: usize = 300;

/// Module-scoped exporter failures.
#[derive(Debug, Error)]
pub enum ExporterError {
    /// The exporter binary could not be spawned at all.
    #[error("failed to launch '{command}': {error}")]
    Launch {
        /// Executable that was invoked.
        command: String,
        /// Underlying spawn error.
        #[source]
        error: std::io::Error,
    },

    /// The exporter exited with a non-zero status.
    #[error("nim jsondoc exited with {status}: {stderr}")]
    Failed {
        /// Exit status of the child.
        status: ExitStatus,
        /// Truncated stderr excerpt.
        stderr: String,
    },

    /// The exporter reported success but the output file is missing.
    #[error("nim jsondoc reported success but '{}' was not created", .0.display())]
    MissingOutput(PathBuf),

    /// The exporter ran past the configured time limit and was killed.
    #[error("nim jsondoc timed out after {0}s")]
    Timeout(u64),
}

/// Invoke `nim jsondoc` for one module source file.
pub fn run_jsondoc(
    nim: &str,
    source: &Path,
    out_file: &Path,
    timeout: Option<Duration>,
) -> Result<(), ExporterError> {
    let mut command = Command::new(nim);
    command
        .arg("jsondoc")
        .arg("--hints:off")
        .arg(format!("--out:{}", out_file.display()))
        .arg(source)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    debug!(source = %source.display(), out = %out_file.display(), "running nim jsondoc");

    let output = match timeout {
        Some(limit) => wait_with_timeout(&mut command, nim, limit)?,
        None => command.output().map_err(|error| ExporterError::Launch {
            command: nim.to_string(),
            error,
        })?,
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ExporterError::Failed {
            status: output.status,
            stderr: truncate_chars(stderr.trim(), STDERR_EXCERPT_CHARS),
        });
    }

    if !out_file.exists() {
        return Err(ExporterError::MissingOutput(out_file.to_path_buf()));
    }

    Ok(())
}

/// Run the command with a deadline. Expiry kills the child and reports a
/// timeout; the pipeline treats that like any other module failure.
fn wait_with_timeout(
    command: &mut Command,
    nim: &str,
    limit: Duration,
) -> Result<Output, ExporterError> {
    let mut child = command.spawn().map_err(|error| ExporterError::Launch {
        command: nim.to_string(),
        error,
    })?;

    let deadline = Instant::now() + limit;
    loop {
        match child.try_wait() {
            Ok(Some(_)) => {
                return child.wait_with_output().map_err(|error| ExporterError::Launch {
                    command: nim.to_string(),
                    error,
                });
            }
            Ok(None) => {
                if Instant::now() >= deadline {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(ExporterError::Timeout(limit.as_secs()));
                }
                std::thread::sleep(Duration::from_millis(50));
            }
            Err(error) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(ExporterError::Launch {
                    command: nim.to_string(),
                    error,
                });
            }
        }
    }
}

fn truncate_chars(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        text.chars().take(limit).collect()
    }
}
