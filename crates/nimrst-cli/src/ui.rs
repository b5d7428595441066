//! Terminal UI helpers: status messages and duration formatting.
//!
//! All status output goes to stderr so generated pages and shell pipelines
//! stay clean. Color handling respects NO_COLOR and FORCE_COLOR and falls
//! back to terminal capability detection.

use std::time::Duration;

use owo_colors::OwoColorize;

/// Print a success message to stderr.
pub fn success(message: &str) {
    eprintln!("{} {}", "✓".green().bold(), message);
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    eprintln!("{} {}", "ℹ".blue().bold(), message);
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
}

/// Print an error message to stderr.
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

/// Check if color output should be enabled.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    console::user_attended_stderr()
}

/// Initialize color support based on environment.
///
/// `owo-colors` respects NO_COLOR and terminal capabilities on its own;
/// this hook exists for explicit initialization at startup.
pub fn init_colors() {
    let _ = should_use_color();
}

/// Format a duration in the most readable unit (ms, s, or m s).
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let minutes = total_ms / 60_000;
        let seconds = (total_ms % 60_000) / 1000;
        format!("{}m {}s", minutes, seconds)
    }
}
