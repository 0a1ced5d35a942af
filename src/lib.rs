//! Markdown construction for documentation tooling.
//!
//! Renders structured documentation elements (headings, code blocks,
//! links, lists, collapsible sections) as markdown for several rendering
//! dialects, and resolves source locations into hosted repository browser
//! URLs. All operations are pure string computation; callers own file I/O,
//! source parsing and document assembly.

mod format;
mod location;
mod repolink;

pub use format::base::{escape, plain_text};
pub use format::{BitbucketMarkdown, Formatter, GithubMarkdown, MkDocsMarkdown};
pub use location::{Location, Position, Repo, RepoType};
pub use repolink::{BitbucketRepoLink, GithubRepoLink, GitlabRepoLink, RepoLink};
