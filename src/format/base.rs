//! Dialect-agnostic markdown construction primitives.
//!
//! Every dialect formatter composes these building blocks. None of them
//! escape their input; escaping is applied (or skipped) by the formatter
//! methods that call them.

use anyhow::{Result, bail};
use comrak::nodes::NodeValue;
use comrak::{Arena, Options, parse_document};
use regex::Regex;
use std::sync::LazyLock;

static ESCAPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\\`*_{}\[\]()<>#+\-!~])").expect("escape regex"));

/// Wraps text in strong-emphasis markers.
///
/// Empty input produces empty output so callers can pass through optional
/// fragments without emitting bare `****`.
pub fn bold(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    format!("**{}**", text)
}

/// Converts text into a header of the provided level.
///
/// Levels above 6 are clamped to 6, the deepest markdown heading.
///
/// # Errors
///
/// Returns error if `level` is less than 1
pub fn header(level: usize, text: &str) -> Result<String> {
    if level < 1 {
        bail!("header level cannot be less than 1");
    }
    let level = level.min(6);
    Ok(format!("{} {}", "#".repeat(level), text))
}

/// Produces an inline anchor marker with the given identifier.
///
/// Used to manually tag a location for later linking via
/// `raw_local_href`.
pub fn anchor(name: &str) -> String {
    format!("<a name=\"{}\"></a>", name)
}

/// Converts text into a header of the provided level with an embedded
/// anchor, independent of the text-derived slug.
///
/// # Errors
///
/// Returns error if `level` is less than 1
pub fn anchor_header(level: usize, text: &str, anchor_name: &str) -> Result<String> {
    header(level, &format!("{}{}", anchor(anchor_name), text))
}

/// Wraps code in a fenced code block tagged with the provided language.
///
/// An empty language produces an untagged block. The code is embedded
/// verbatim between the fence markers.
pub fn code_block(language: &str, code: &str) -> String {
    format!("```{}\n{}\n```", language, code)
}

/// Generates an inline link with the given text and href.
///
/// The href is wrapped in angle brackets so parentheses and spaces in the
/// destination do not break the link syntax.
pub fn link(text: &str, href: &str) -> String {
    format!("[{}](<{}>)", text, href)
}

/// Generates an unordered list entry at the provided zero-indexed depth.
///
/// Depth 0 is the topmost level; each depth increment adds four spaces of
/// indentation before the marker. Empty text produces an empty string with
/// no marker emitted.
pub fn list_entry(depth: usize, text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    format!("{}- {}", "    ".repeat(depth), text)
}

/// Generates a collapsible section with the given title and body.
pub fn accordion(title: &str, body: &str) -> String {
    format!("{}{}{}", accordion_header(title), body, accordion_terminator())
}

/// Generates the header visible while an accordion is collapsed.
///
/// Pair with [`accordion_terminator`] when the body must be rendered
/// independently (e.g. to interleave further headers inside it):
///
/// ```text
/// accordion_header("Title") + body + accordion_terminator()
/// ```
pub fn accordion_header(title: &str) -> String {
    format!("<details><summary>{}</summary>\n\n", title)
}

/// Terminates an accordion opened with [`accordion_header`].
pub fn accordion_terminator() -> String {
    "\n\n</details>".to_string()
}

/// Escapes markdown special characters so text renders literally.
pub fn escape(text: &str) -> String {
    ESCAPE_REGEX.replace_all(text, r"\$1").into_owned()
}

/// Strips markdown formatting markers, producing plain text.
///
/// Parses the input as markdown and collects literal text, keeping inline
/// code content and turning soft/hard breaks into single spaces. Used by
/// dialect slug algorithms, which operate on rendered heading text rather
/// than its raw markdown source.
pub fn plain_text(text: &str) -> String {
    let arena = Arena::new();
    let root = parse_document(&arena, text, &Options::default());

    let mut out = String::new();
    for node in root.descendants() {
        match &node.data.borrow().value {
            NodeValue::Text(literal) => out.push_str(literal),
            NodeValue::Code(code) => out.push_str(&code.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak => out.push(' '),
            _ => {}
        }
    }
    out
}
