//! Signature cleaning for rendered code blocks.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a `{. ... .}` pragma block, including leading whitespace. Pragmas
/// can span lines.
static PRAGMA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\s*\{\..*?\.\}").expect("valid pragma pattern"));

/// Strip Nim compiler pragmas from a declaration signature.
///
/// Total: removes every pragma block wherever it occurs and trims the
/// surrounding whitespace. Code outside the matched ranges is untouched.
pub fn clean_signature(code: &str) -> String {
    PRAGMA.replace_all(code, "").trim().to_string()
}
