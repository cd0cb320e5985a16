//! Single-line collapse of short rendered comments
//!
//! A post-processing pass over the writer's output. It matches the canonical
//! "one visible content line" shape (`/**`, one interior line, `*/`) and
//! rewrites the whole comment onto one physical line when the content fits
//! the width budget. It is a pure function of the rendered string; no
//! re-wrapping happens here.

use once_cell::sync::Lazy;
use regex::Regex;

/// `/**` + one interior `* content` line + `*/`, nothing else.
static SINGLE_CONTENT_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t]*/\*\*\n[ \t]*\*( (.*))?\n[ \t]*\*/$").unwrap());

/// `/**` directly over `*/` with no interior line at all.
static NO_CONTENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[ \t]*/\*\*\n[ \t]*\*/$").unwrap());

/// Collapse a rendered comment onto one line when its content fits.
///
/// The width budget is `max_width - "/**  */".len() - block_indent`: the
/// collapsed form spends seven columns on the delimiters and their padding,
/// and the caller will place it after `block_indent` columns of code
/// indentation. Multi-line content and over-budget content pass through
/// unchanged.
pub fn collapse_if_possible(block_indent: usize, max_width: usize, rendered: &str) -> String {
    if NO_CONTENT.is_match(rendered) {
        return "/** */".to_string();
    }
    let Some(caps) = SINGLE_CONTENT_LINE.captures(rendered) else {
        return rendered.to_string();
    };
    let content = caps
        .get(2)
        .map(|content| content.as_str())
        .unwrap_or("")
        .trim_end();
    if content.is_empty() {
        return "/** */".to_string();
    }
    if content.chars().count() + "/**  */".len() + block_indent <= max_width {
        format!("/** {} */", content)
    } else {
        rendered.to_string()
    }
}
