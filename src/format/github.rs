//! GitHub Flavored Markdown dialect.

use anyhow::Result;
use regex::Regex;
use std::sync::LazyLock;

use super::{Formatter, base, default_repo_links, dispatch_code_href};
use crate::location::Location;
use crate::repolink::RepoLink;

// GitHub's heading-id generator: every whitespace character becomes a
// hyphen, then anything that is not a Unicode letter, digit, hyphen or
// underscore is removed. The hyphenation must run first or adjacent
// punctuation would merge separate word runs.
static GFM_WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s").expect("gfm whitespace regex"));
static GFM_REMOVE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\d_-]+").expect("gfm remove regex"));

/// Formatter for GitHub Flavored Markdown.
pub struct GithubMarkdown {
    repo_links: Vec<Box<dyn RepoLink>>,
}

impl GithubMarkdown {
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

impl Default for GithubMarkdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for GithubMarkdown {
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
        let result = GFM_WHITESPACE_REGEX.replace_all(result, "-");
        let result = GFM_REMOVE_REGEX.replace_all(&result, "");

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
