//! Conversion of jsondoc HTML description fragments to RST text.
//!
//! This is ordered pattern substitution over a known, bounded tag subset,
//! not a general HTML parser. The rules form an explicit table applied in
//! sequence; their order is load-bearing. In particular the literal-code
//! collapse must run before the generic tag strip, or the nested wrapper
//! structure it matches on would already be gone.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// One rewrite step: a pattern plus the replacement applied to each match.
struct RewriteRule {
    pattern: Regex,
    replace: fn(&Captures) -> String,
}

impl RewriteRule {
    fn new(pattern: &str, replace: fn(&Captures) -> String) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("valid rewrite pattern"),
            replace,
        }
    }
}

/// Matches any tag. Shared by the literal-code rule and the final strip.
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("valid tag pattern"));

static BLANK_LINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("valid blank-line pattern"));

/// The ordered rewrite table. Applied top to bottom.
static REWRITE_RULES: Lazy<Vec<RewriteRule>> = Lazy::new(|| {
    vec![
        // <tt class="docutils literal"><span class="pre">TEXT</span></tt>
        // collapses to ``TEXT`` with the inner wrappers discarded.
        RewriteRule::new(r"(?s)<tt[^>]*>(.*?)</tt>", |caps: &Captures| {
            format!("``{}``", strip_tags(&caps[1]))
        }),
        // <p>...</p> becomes the content followed by a paragraph separator.
        RewriteRule::new(r"(?s)<p>(.*?)</p>", |caps: &Captures| {
            format!("{}\n\n", &caps[1])
        }),
        // <b>/<strong> become **bold**.
        RewriteRule::new(r"<(?:b|strong)>(.*?)</(?:b|strong)>", |caps: &Captures| {
            format!("**{}**", &caps[1])
        }),
        // <em>/<i> become *italic*.
        RewriteRule::new(r"<(?:em|i)>(.*?)</(?:em|i)>", |caps: &Captures| {
            format!("*{}*", &caps[1])
        }),
        // List containers open and close on their own blank-ish lines; each
        // item becomes a bulleted line.
        RewriteRule::new(r"<ul[^>]*>", |_: &Captures| "\n".to_string()),
        RewriteRule::new(r"</ul>", |_: &Captures| "\n".to_string()),
        RewriteRule::new(r"(?s)<li>(.*?)</li>", |caps: &Captures| {
            format!("\n- {}", &caps[1])
        }),
        // Anything still tagged is stripped, keeping its content.
        RewriteRule::new(r"<[^>]+>", |_: &Captures| String::new()),
    ]
});

/// The fixed entity set jsondoc fragments use.
const ENTITIES: [(&str, &str); 6] = [
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&amp;", "&"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&nbsp;", " "),
];

/// Convert an HTML description fragment to RST.
///
/// Total: unparseable input degrades to best-effort stripped text, never an
/// error. Idempotent on text containing no tags.
pub fn html_to_rst(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let mut text = html.to_string();
    for rule in REWRITE_RULES.iter() {
        text = rule
            .pattern
            .replace_all(&text, |caps: &Captures| (rule.replace)(caps))
            .into_owned();
    }

    for (entity, literal) in ENTITIES {
        text = text.replace(entity, literal);
    }

    let text = BLANK_LINES.replace_all(&text, "\n\n");
    text.trim().to_string()
}

fn strip_tags(fragment: &str) -> String {
    TAG.replace_all(fragment, "").into_owned()
}
