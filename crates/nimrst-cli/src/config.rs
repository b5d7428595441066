//! Configuration loading for the nimrst CLI.
//!
//! Priority: CLI flags > environment variables (`NIMRST_*`) > config file >
//! defaults. The config file is `nimrst.config.json` in the working
//! directory unless `--config` points elsewhere.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format as _, Json, Serialized},
    Figment,
};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cli::GenerateArgs;
use crate::error::{ConfigError, Result};

/// One module to document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleSpec {
    /// Module name; keys the output file and the cross-reference anchors.
    pub name: String,
    /// Path to the Nim source file handed to the exporter.
    pub source: PathBuf,
    /// Human-readable page title.
    pub title: String,
}

/// Full pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsConfig {
    /// Modules to process, in the order they should appear in the index.
    #[serde(default)]
    pub modules: Vec<ModuleSpec>,

    /// Destination directory for generated RST pages.
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Cache directory for the raw jsondoc bundles.
    #[serde(default = "default_json_dir")]
    pub json_dir: PathBuf,

    /// Nim compiler executable.
    #[serde(default = "default_nim")]
    pub nim: String,

    /// Optional per-module exporter timeout in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            modules: Vec::new(),
            out_dir: default_out_dir(),
            json_dir: default_json_dir(),
            nim: default_nim(),
            timeout_secs: None,
        }
    }
}

impl DocsConfig {
    /// Load configuration from defaults, the config file, and environment
    /// variables.
    ///
    /// An explicitly requested config file must exist; the default path is
    /// optional.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        let file = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()).into());
                }
                Some(path.to_path_buf())
            }
            None => {
                let default_path = Path::new("nimrst.config.json");
                default_path.exists().then(|| default_path.to_path_buf())
            }
        };

        if let Some(path) = file {
            figment = figment.merge(Json::file(path));
        }

        // NIMRST_NIM, NIMRST_OUT_DIR, etc.
        figment = figment.merge(Env::prefixed("NIMRST_"));

        figment
            .extract()
            .map_err(|e| ConfigError::Invalid(e.to_string()).into())
    }

    /// Apply command-line overrides on top of the extracted configuration.
    pub fn apply_overrides(&mut self, args: &GenerateArgs) {
        if let Some(out_dir) = &args.out_dir {
            self.out_dir = out_dir.clone();
        }
        if let Some(json_dir) = &args.json_dir {
            self.json_dir = json_dir.clone();
        }
        if let Some(nim) = &args.nim {
            self.nim = nim.clone();
        }
        if let Some(timeout) = args.timeout {
            self.timeout_secs = Some(timeout);
        }
    }

    /// Structural validation: at least one module, no duplicate names.
    pub fn validate(&self) -> Result<()> {
        if self.modules.is_empty() {
            return Err(ConfigError::NoModules.into());
        }

        let mut seen = FxHashSet::default();
        for module in &self.modules {
            if !seen.insert(module.name.as_str()) {
                return Err(ConfigError::DuplicateModule(module.name.clone()).into());
            }
        }

        Ok(())
    }
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("docs/api")
}

fn default_json_dir() -> PathBuf {
    PathBuf::from("docs/_nim_json")
}

fn default_nim() -> String {
    // The NIM environment variable overrides the executable name, matching
    // the conventions of Nim build scripts.
    std::env::var("NIM").unwrap_or_else(|_| "nim".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(name: &str) -> ModuleSpec {
        ModuleSpec {
            name: name.to_string(),
            source: PathBuf::from(format!("src/{name}.nim")),
            title: format!("{name} — Test module"),
        }
    }

    #[test]
    fn defaults_are_sensible() {
        let config = DocsConfig::default();
        assert_eq!(config.out_dir, PathBuf::from("docs/api"));
        assert_eq!(config.json_dir, PathBuf::from("docs/_nim_json"));
        assert!(config.modules.is_empty());
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn validate_rejects_empty_module_list() {
        let config = DocsConfig::default();
        assert!(matches!(
            config.validate(),
            Err(crate::error::CliError::Config(ConfigError::NoModules))
        ));
    }

    #[test]
    fn validate_rejects_duplicate_names() {
        let config = DocsConfig {
            modules: vec![module("io"), module("io")],
            ..DocsConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(crate::error::CliError::Config(ConfigError::DuplicateModule(name))) if name == "io"
        ));
    }

    #[test]
    fn validate_accepts_distinct_names() {
        let config = DocsConfig {
            modules: vec![module("io"), module("gui")],
            ..DocsConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn overrides_replace_extracted_values() {
        let mut config = DocsConfig::default();
        let args = crate::cli::GenerateArgs {
            out_dir: Some(PathBuf::from("build/rst")),
            nim: Some("/opt/nim/bin/nim".to_string()),
            timeout: Some(30),
            ..Default::default()
        };
        config.apply_overrides(&args);
        assert_eq!(config.out_dir, PathBuf::from("build/rst"));
        assert_eq!(config.nim, "/opt/nim/bin/nim");
        assert_eq!(config.timeout_secs, Some(30));
        assert_eq!(config.json_dir, PathBuf::from("docs/_nim_json"));
    }

    #[test]
    fn explicit_missing_config_file_errors() {
        let err = DocsConfig::load(Some(Path::new("/definitely/not/here.json")));
        assert!(matches!(
            err,
            Err(crate::error::CliError::Config(ConfigError::NotFound(_)))
        ));
    }
}
