//! Generate command: the documentation pipeline.
//!
//! Sequential per-module processing. A module failure (exporter, parse, or
//! page write) is recorded and the loop continues; partial progress is
//! valuable for documentation builds. Only an unusable environment (output
//! directories that cannot be created) aborts the run.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::cli::GenerateArgs;
use crate::config::DocsConfig;
use crate::error::{CliError, Result};
use crate::exporter;
use crate::ui;

/// Execute the generate command.
///
/// # Pipeline
///
/// 1. Load and validate configuration (CLI > Env > File > Defaults)
/// 2. Create the RST output and JSON cache directories (fatal on failure)
/// 3. Per module: run `nim jsondoc`, load the bundle, render and write the page
/// 4. Render the index over the modules that succeeded
/// 5. Exit 0 only if every module succeeded
pub fn execute(args: GenerateArgs) -> Result<ExitCode> {
    let start_time = Instant::now();

    let mut config = DocsConfig::load(args.config.as_deref())?;
    config.apply_overrides(&args);
    config.validate()?;

    create_dir(&config.out_dir)?;
    create_dir(&config.json_dir)?;

    let timeout = config.timeout_secs.map(Duration::from_secs);
    let mut generated: Vec<String> = Vec::new();
    let mut failed: Vec<String> = Vec::new();

    for module in &config.modules {
        let json_file = config.json_dir.join(format!("{}.json", module.name));

        if let Err(err) = exporter::run_jsondoc(&config.nim, &module.source, &json_file, timeout) {
            warn!(module = %module.name, "exporter failed: {err}");
            ui::warning(&format!("{}: {err}", module.name));
            failed.push(module.name.clone());
            continue;
        }

        let bundle = match nimrst_docs::load_bundle(&json_file) {
            Ok(bundle) => bundle,
            Err(err) => {
                warn!(module = %module.name, "bundle rejected: {err}");
                ui::warning(&format!("{}: {err}", module.name));
                failed.push(module.name.clone());
                continue;
            }
        };

        let page = nimrst_docs::render_page(&module.name, &module.title, &bundle);
        let rst_file = config.out_dir.join(format!("{}.rst", module.name));
        if let Err(err) = fs::write(&rst_file, &page) {
            warn!(module = %module.name, "page write failed: {err}");
            ui::warning(&format!("{}: {err}", module.name));
            failed.push(module.name.clone());
            continue;
        }

        info!(module = %module.name, "wrote {}", rst_file.display());
        generated.push(module.name.clone());
    }

    // The index references only the pages that exist.
    let index_file = config.out_dir.join("index.rst");
    fs::write(&index_file, nimrst_docs::render_index(&generated))?;

    ui::success(&format!(
        "Generated {} of {} module pages in {}",
        generated.len(),
        config.modules.len(),
        ui::format_duration(start_time.elapsed())
    ));

    if failed.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        ui::error(&format!("Failed modules: {}", failed.join(", ")));
        Ok(ExitCode::FAILURE)
    }
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|error| CliError::CreateDir {
        path: PathBuf::from(path),
        error,
    })
}
