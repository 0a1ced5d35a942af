//! Source-link strategies for hosted repository browsers.
//!
//! Each hosting provider (GitHub, BitBucket, GitLab) follows its own URL
//! conventions for branch placement and line anchors, so each gets its own
//! [`RepoLink`] implementation. Formatters hold an ordered list of
//! strategies and dispatch to the first one that supports the location's
//! repository type.

mod bitbucket;
mod github;
mod gitlab;

pub use bitbucket::BitbucketRepoLink;
pub use github::GithubRepoLink;
pub use gitlab::GitlabRepoLink;

use anyhow::{Context, Result, bail};
use std::path::{Component, Path};

use crate::location::{Location, RepoType};

/// Builds browser URLs for one hosting provider.
///
/// `code_href` is invoked by a formatter only after `supports` returned
/// true for the location's repository type; strategies never see a
/// location without repository metadata.
pub trait RepoLink: Send + Sync {
    /// Determines whether this strategy handles the given repository type.
    fn supports(&self, repo_type: RepoType) -> bool;

    /// Returns the browser URL for the specified location.
    ///
    /// # Errors
    ///
    /// Returns error if the file path cannot be resolved against the
    /// working directory or repository root
    fn code_href(&self, loc: &Location) -> Result<String>;
}

/// Computes the forward-slash path from the repository root to the
/// location's file.
///
/// Absolute filepaths are taken relative to the working directory, then
/// joined onto the repository's `path_from_root` and re-rooted: leading
/// separators are dropped and `..` components resolved, so the result is
/// relative regardless of how deep the working directory sits locally.
///
/// # Errors
///
/// Returns error if an absolute filepath is not under the working
/// directory, if the joined path escapes the repository root, or if a path
/// component is not valid UTF-8
pub(crate) fn repo_relative_path(loc: &Location) -> Result<String> {
    let repo = loc
        .repo
        .as_ref()
        .context("location has no repository metadata")?;

    let relative: &Path = if loc.filepath.is_absolute() {
        loc.filepath.strip_prefix(&loc.work_dir).with_context(|| {
            format!(
                "file {} is not under working directory {}",
                loc.filepath.display(),
                loc.work_dir.display()
            )
        })?
    } else {
        &loc.filepath
    };

    let full = repo.path_from_root.join(relative);

    let mut segments: Vec<&str> = Vec::new();
    for component in full.components() {
        match component {
            Component::Normal(c) => {
                let segment = c.to_str().context("path contains invalid UTF8")?;
                segments.push(segment);
            }
            Component::ParentDir => {
                if segments.pop().is_none() {
                    bail!("path escapes repository root: {}", full.display());
                }
            }
            // Root and prefix markers are join artifacts; current
            // directory markers carry nothing
            Component::RootDir | Component::Prefix(_) | Component::CurDir => {}
        }
    }

    Ok(segments.join("/"))
}
