//! MkDocs-family Markdown dialect.

use anyhow::Result;
use regex::Regex;
use std::sync::LazyLock;

use super::{Formatter, base, default_repo_links, dispatch_code_href};
use crate::location::Location;
use crate::repolink::RepoLink;

// Observed MkDocs heading-id behavior matches GitHub's today, but the
// renderers are maintained independently, so the dialect keeps its own
// statics rather than sharing them.
static MKDOCS_WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s").expect("mkdocs whitespace regex"));
static MKDOCS_REMOVE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\d_-]+").expect("mkdocs remove regex"));

/// Formatter for MkDocs and similar static-site generators.
pub struct MkDocsMarkdown {
    repo_links: Vec<Box<dyn RepoLink>>,
}

impl MkDocsMarkdown {
    /// Creates a formatter with the default strategy list (GitHub, GitLab,
    /// BitBucket, in that order).
    pub fn new() -> Self {
        Self {
            repo_links: default_repo_links(),
        }
    }

    /// Creates a formatter dispatching source links to the provided
    /// strategies, first match wins.
    pub fn with_repo_links(repo_links: Vec<Box<dyn RepoLink>>) -> Self {
        Self { repo_links }
    }
}

impl Default for MkDocsMarkdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for MkDocsMarkdown {
    fn bold(&self, text: &str) -> String {
        base::bold(text)
    }

    fn code_block(&self, language: &str, code: &str) -> String {
        base::code_block(language, code)
    }

    fn anchor(&self, anchor: &str) -> String {
        base::anchor(anchor)
    }

    fn header(&self, level: usize, text: &str) -> Result<String> {
        base::header(level, &self.escape(text))
    }

    fn raw_header(&self, level: usize, text: &str) -> Result<String> {
        base::header(level, text)
    }

    fn anchor_header(&self, level: usize, text: &str, anchor: &str) -> Result<String> {
        base::anchor_header(level, &self.escape(text), anchor)
    }

    fn raw_anchor_header(&self, level: usize, text: &str, anchor: &str) -> Result<String> {
        base::anchor_header(level, text, anchor)
    }

    fn local_href(&self, header_text: &str) -> String {
        let result = base::plain_text(header_text);
        let result = result.to_lowercase();
        let result = result.trim();
        let result = MKDOCS_WHITESPACE_REGEX.replace_all(result, "-");
        let result = MKDOCS_REMOVE_REGEX.replace_all(&result, "");

        format!("#{}", result)
    }

    fn raw_local_href(&self, anchor: &str) -> String {
        format!("#{}", anchor)
    }

    fn link(&self, text: &str, href: &str) -> String {
        base::link(text, href)
    }

    fn code_href(&self, loc: &Location) -> Result<String> {
        dispatch_code_href(&self.repo_links, loc)
    }

    fn list_entry(&self, depth: usize, text: &str) -> String {
        base::list_entry(depth, text)
    }

    fn accordion(&self, title: &str, body: &str) -> String {
        base::accordion(title, body)
    }

    fn accordion_header(&self, title: &str) -> String {
        base::accordion_header(title)
    }

    fn accordion_terminator(&self) -> String {
        base::accordion_terminator()
    }

    fn escape(&self, text: &str) -> String {
        base::escape(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_href() {
        let f = MkDocsMarkdown::new();
        assert_eq!(f.local_href("Normal Header"), "#normal-header");
        assert_eq!(f.local_href("Multiple\t whitespace"), "#multiple--whitespace");
        assert_eq!(f.local_href("Special(#)%^Characters"), "#specialcharacters");
    }

    #[test]
    fn test_local_href_strips_markdown() {
        let f = MkDocsMarkdown::new();
        assert_eq!(f.local_href("type `Renderer`"), "#type-renderer");
    }

    #[test]
    fn test_anchor_header_escapes_text() {
        let f = MkDocsMarkdown::new();
        assert_eq!(
            f.anchor_header(2, "a*b", "frag").unwrap(),
            "## <a name=\"frag\"></a>a\\*b"
        );
    }

    #[test]
    fn test_raw_anchor_header_keeps_text() {
        let f = MkDocsMarkdown::new();
        assert_eq!(
            f.raw_anchor_header(2, "a*b", "frag").unwrap(),
            "## <a name=\"frag\"></a>a*b"
        );
    }
}
