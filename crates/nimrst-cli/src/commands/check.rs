//! Check command: configuration validation.
//!
//! Loads and validates the configuration and verifies each module's source
//! file exists, without invoking the exporter or writing anything.

use std::process::ExitCode;

use crate::cli::CheckArgs;
use crate::config::DocsConfig;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
pub fn execute(args: CheckArgs) -> Result<ExitCode> {
    let config = DocsConfig::load(args.config.as_deref())?;
    config.validate()?;

    let mut problems = 0usize;
    for module in &config.modules {
        if module.source.exists() {
            ui::success(&format!("{}: {}", module.name, module.source.display()));
        } else {
            ui::error(&format!(
                "{}: source '{}' not found",
                module.name,
                module.source.display()
            ));
            problems += 1;
        }
    }

    if problems == 0 {
        ui::success(&format!("{} modules configured, all sources present", config.modules.len()));
        Ok(ExitCode::SUCCESS)
    } else {
        ui::error(&format!("{problems} module source(s) missing"));
        Ok(ExitCode::FAILURE)
    }
}
