//! BitBucket Server source browser links.

use anyhow::{Context, Result};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use super::{RepoLink, repo_relative_path};
use crate::location::{Location, RepoType};

/// Characters that must be escaped inside the `at=` query value. Covers the
/// ref separator itself so branch names containing slashes round-trip.
const REF_QUERY: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'=')
    .add(b'?');

/// Builds `browse/{path}?at=refs%2Fheads%2F{branch}` URLs with bare line
/// number anchors (`#15` or `#15-20`, no `L` prefix).
pub struct BitbucketRepoLink;

impl RepoLink for BitbucketRepoLink {
    fn supports(&self, repo_type: RepoType) -> bool {
        repo_type == RepoType::Bitbucket
    }

    fn code_href(&self, loc: &Location) -> Result<String> {
        let repo = loc
            .repo
            .as_ref()
            .context("location has no repository metadata")?;
        let path = repo_relative_path(loc)?;

        let line_ref = if loc.start.line == loc.end.line {
            loc.start.line.to_string()
        } else {
            format!("{}-{}", loc.start.line, loc.end.line)
        };

        let at_ref = format!("refs/heads/{}", repo.default_branch);
        let at = utf8_percent_encode(&at_ref, REF_QUERY);

        Ok(format!(
            "{}/browse/{}?at={}#{}",
            repo.remote, path, at, line_ref
        ))
    }
}
