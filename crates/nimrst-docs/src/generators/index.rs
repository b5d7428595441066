//! Top-level API index rendering.

use std::fmt::Write;

/// Render the API index page referencing each generated module.
///
/// Modules appear in the order given, which is the configured order rather
/// than an alphabetical sort.
pub fn render_index(modules: &[String]) -> String {
    let mut output = String::new();

    let title = "API Reference";
    let bar = "=".repeat(title.len());
    let _ = writeln!(&mut output, "{bar}\n{title}\n{bar}\n");
    let _ = writeln!(&mut output, "Complete reference for all exported symbols.");
    let _ = writeln!(
        &mut output,
        "Generated automatically from source docstrings via ``nim jsondoc``.\n"
    );
    let _ = writeln!(&mut output, ".. toctree::");
    let _ = writeln!(&mut output, "   :maxdepth: 1");
    let _ = writeln!(&mut output, "   :caption: Modules\n");

    for name in modules {
        let _ = writeln!(&mut output, "   {name}");
    }

    output
}
