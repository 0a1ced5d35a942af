//! Markdown formatting for multiple rendering dialects.
//!
//! Each supported rendering target (GitHub-flavored, BitBucket, MkDocs)
//! implements the [`Formatter`] contract. Dialects share the construction
//! primitives in [`base`] and differ only in their slug algorithm, their
//! escaping choices, and the ordered list of [`RepoLink`] strategies they
//! are configured with.

pub mod base;

mod bitbucket;
mod github;
mod mkdocs;

pub use bitbucket::BitbucketMarkdown;
pub use github::GithubMarkdown;
pub use mkdocs::MkDocsMarkdown;

use anyhow::Result;

use crate::location::Location;
use crate::repolink::RepoLink;

/// Renders documentation elements as markdown for one rendering dialect.
///
/// Operations prefixed `raw_` skip escaping; their counterparts escape
/// caller-supplied text first. The split exists because some callers hold
/// pre-rendered markdown fragments (e.g. inline code spans) that must not
/// be double-escaped.
///
/// Formatter instances hold only an immutable strategy list, so a single
/// instance is safe to use from multiple threads.
pub trait Formatter: Send + Sync {
    /// Converts the provided text to bold.
    fn bold(&self, text: &str) -> String;

    /// Wraps the provided code as a code block tagged with the provided
    /// language (or no language if the empty string is provided).
    fn code_block(&self, language: &str, code: &str) -> String;

    /// Produces an inline anchor marker for the provided identifier.
    fn anchor(&self, anchor: &str) -> String;

    /// Converts the provided text into a header of the provided level,
    /// escaping the text first.
    ///
    /// # Errors
    ///
    /// Returns error if `level` is less than 1
    fn header(&self, level: usize, text: &str) -> Result<String>;

    /// Converts the provided text into a header of the provided level
    /// without escaping the text.
    ///
    /// # Errors
    ///
    /// Returns error if `level` is less than 1
    fn raw_header(&self, level: usize, text: &str) -> Result<String>;

    /// Converts the provided text and custom anchor into a header of the
    /// provided level, escaping the text first.
    ///
    /// # Errors
    ///
    /// Returns error if `level` is less than 1
    fn anchor_header(&self, level: usize, text: &str, anchor: &str) -> Result<String>;

    /// Converts the provided text and custom anchor into a header of the
    /// provided level without escaping the text.
    ///
    /// # Errors
    ///
    /// Returns error if `level` is less than 1
    fn raw_anchor_header(&self, level: usize, text: &str, anchor: &str) -> Result<String>;

    /// Generates an href for navigating to a header with the given text
    /// located within the same document, using this dialect's heading-id
    /// algorithm.
    fn local_href(&self, header_text: &str) -> String;

    /// Generates an href within the same document from an already-known
    /// anchor identifier instead of text to slugify.
    fn raw_local_href(&self, anchor: &str) -> String;

    /// Generates a link with the given text and href values.
    fn link(&self, text: &str, href: &str) -> String;

    /// Generates an href into the hosted source browser for the provided
    /// location.
    ///
    /// Returns an empty string when the location carries no repository
    /// metadata or no configured strategy supports its repository type;
    /// link omission is a valid rendering outcome.
    ///
    /// # Errors
    ///
    /// Returns error if a matching strategy fails to resolve the
    /// location's file path
    fn code_href(&self, loc: &Location) -> Result<String>;

    /// Generates an unordered list entry with the provided text at the
    /// provided zero-indexed depth.
    fn list_entry(&self, depth: usize, text: &str) -> String;

    /// Generates a collapsible section whose visible title while collapsed
    /// is `title` and whose expanded content is `body`.
    fn accordion(&self, title: &str, body: &str) -> String;

    /// Generates the header visible when an accordion is collapsed.
    ///
    /// Pair with [`Formatter::accordion_terminator`] when the body must be
    /// rendered independently.
    fn accordion_header(&self, title: &str) -> String;

    /// Terminates an accordion opened with
    /// [`Formatter::accordion_header`].
    fn accordion_terminator(&self) -> String;

    /// Escapes markdown special characters in the provided text.
    fn escape(&self, text: &str) -> String;
}

/// Dispatches a location to the first strategy supporting its repository
/// type.
///
/// Returns `Ok("")` when the location has no repository metadata or no
/// strategy matches.
pub(crate) fn dispatch_code_href(links: &[Box<dyn RepoLink>], loc: &Location) -> Result<String> {
    let Some(repo) = &loc.repo else {
        return Ok(String::new());
    };

    for link in links {
        if link.supports(repo.repo_type) {
            return link.code_href(loc);
        }
    }

    Ok(String::new())
}

/// Default strategy list shared by the built-in dialects.
pub(crate) fn default_repo_links() -> Vec<Box<dyn RepoLink>> {
    vec![
        Box::new(crate::repolink::GithubRepoLink),
        Box::new(crate::repolink::GitlabRepoLink),
        Box::new(crate::repolink::BitbucketRepoLink),
    ]
}
