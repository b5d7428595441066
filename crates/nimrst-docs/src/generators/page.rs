//! Per-module reference page rendering.

use std::fmt::Write;

use rustc_hash::FxHashMap;

use crate::convert::html_to_rst;
use crate::model::{DocBundle, SymbolEntry, SymbolKind};
use crate::signature::clean_signature;

/// Render a complete RST reference page for one module.
///
/// Sections follow [`SymbolKind::DISPLAY_ORDER`]; entries within a section
/// keep their declaration order. Kinds with no entries produce no heading.
pub fn render_page(module_name: &str, title: &str, bundle: &DocBundle) -> String {
    let mut output = String::new();

    // Page title with matching overline and underline.
    let bar = "=".repeat(title.chars().count());
    let _ = writeln!(&mut output, "{bar}\n{title}\n{bar}\n");

    let module_desc = html_to_rst(&bundle.module_description);
    if !module_desc.is_empty() {
        let _ = writeln!(&mut output, "{module_desc}\n");
    }

    // Group entries by kind, preserving source order within each group.
    let mut by_kind: FxHashMap<SymbolKind, Vec<&SymbolEntry>> = FxHashMap::default();
    for entry in &bundle.entries {
        by_kind.entry(entry.kind).or_default().push(entry);
    }

    // Occurrence counts disambiguate overloaded symbols and keep anchors
    // unique across the whole page. Scoped to this call.
    let mut occurrences: FxHashMap<&str, usize> = FxHashMap::default();

    for kind in SymbolKind::DISPLAY_ORDER {
        let Some(entries) = by_kind.get(&kind) else {
            continue;
        };

        let label = kind.section_label();
        let _ = writeln!(&mut output, "{label}\n{}\n", "-".repeat(label.len()));

        for entry in entries {
            let count = occurrences.entry(entry.name.as_str()).or_insert(0);
            let index = *count;
            *count += 1;
            render_symbol(&mut output, module_name, entry, index);
        }
    }

    output
}

fn render_symbol(buffer: &mut String, module_name: &str, entry: &SymbolEntry, index: usize) {
    // Cross-reference label: bare for the first occurrence, numbered for
    // overloads.
    let anchor = if index == 0 {
        format!("{module_name}.{}", entry.name)
    } else {
        format!("{module_name}.{}.{index}", entry.name)
    };
    let _ = writeln!(buffer, ".. _{anchor}:\n");

    let heading = if index == 0 {
        entry.name.clone()
    } else {
        format!("{} ({})", entry.name, index + 1)
    };
    let _ = writeln!(buffer, "{heading}\n{}\n", "~".repeat(heading.chars().count()));

    let code = clean_signature(&entry.code);
    if !code.is_empty() {
        let _ = writeln!(buffer, ".. code-block:: nim\n");
        for code_line in code.lines() {
            let _ = writeln!(buffer, "   {code_line}");
        }
        buffer.push('\n');
    }

    let description = html_to_rst(&entry.description);
    if !description.is_empty() {
        let _ = writeln!(buffer, "{description}\n");
    }
}
