//! Source locations and repository metadata for link generation.

use std::path::PathBuf;

/// A 1-indexed line/column coordinate within a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub col: usize,
}

/// Hosting provider managing a repository.
///
/// Each variant is handled by a matching [`RepoLink`](crate::RepoLink)
/// strategy. New providers are added as new variants plus new strategy
/// implementations; existing strategies never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoType {
    /// GitHub and GitHub Enterprise style browsers
    Github,
    /// BitBucket Server style browsers
    Bitbucket,
    /// GitLab style browsers
    Gitlab,
}

/// Repository metadata needed to build source browser URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repo {
    /// Hosting provider type
    pub repo_type: RepoType,
    /// Canonical remote base URL (no trailing slash)
    pub remote: String,
    /// Branch or ref to link against
    pub default_branch: String,
    /// Subdirectory offset between the local working tree root and the
    /// repository root
    pub path_from_root: PathBuf,
}

/// A span of source positions within a file, optionally tied to repository
/// metadata.
///
/// `repo: None` means source-link generation is not applicable (no VCS
/// metadata available) and is a valid state, not an error. Callers are
/// responsible for `start` not being positioned after `end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Start of the span
    pub start: Position,
    /// End of the span (inclusive)
    pub end: Position,
    /// Path to the file, absolute or already relative to `work_dir`
    pub filepath: PathBuf,
    /// Base directory for resolving absolute filepaths
    pub work_dir: PathBuf,
    /// Owning repository, when known
    pub repo: Option<Repo>,
}
