//! Loading of `nim jsondoc` bundles from disk.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::error::{DocsError, Result};
use crate::model::{DocBundle, SymbolEntry, SymbolKind};

/// Wire format of a jsondoc bundle.
#[derive(Debug, Deserialize)]
struct RawBundle {
    #[serde(rename = "moduleDescription", default)]
    module_description: String,
    #[serde(default)]
    entries: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    name: String,
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    code: String,
    #[serde(default)]
    description: String,
}

/// Load and parse one jsondoc bundle.
///
/// Entry order is preserved exactly. Entries with a missing or unrecognized
/// kind tag are kept and treated as procedures; both cases are reported as
/// warnings rather than failing the bundle.
pub fn load_bundle(path: &Path) -> Result<DocBundle> {
    if !path.exists() {
        return Err(DocsError::NotFound(path.to_path_buf()));
    }

    let raw = fs::read_to_string(path).map_err(|error| DocsError::Io {
        path: path.to_path_buf(),
        error,
    })?;

    let bundle: RawBundle = serde_json::from_str(&raw).map_err(|error| DocsError::Malformed {
        path: path.to_path_buf(),
        error,
    })?;

    Ok(DocBundle {
        module_description: bundle.module_description,
        entries: bundle
            .entries
            .into_iter()
            .map(|entry| resolve_entry(entry, path))
            .collect(),
    })
}

fn resolve_entry(entry: RawEntry, path: &Path) -> SymbolEntry {
    let kind = match entry.kind.as_deref() {
        Some(tag) => SymbolKind::from_tag(tag).unwrap_or_else(|| {
            warn!(
                symbol = %entry.name,
                tag,
                bundle = %path.display(),
                "unrecognized kind tag, treating as procedure"
            );
            SymbolKind::default()
        }),
        None => {
            warn!(
                symbol = %entry.name,
                bundle = %path.display(),
                "entry has no kind tag, treating as procedure"
            );
            SymbolKind::default()
        }
    };

    SymbolEntry {
        name: entry.name,
        kind,
        code: entry.code,
        description: entry.description,
    }
}
