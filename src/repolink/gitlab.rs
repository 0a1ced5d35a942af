//! GitLab source browser links.

use anyhow::{Context, Result};

use super::{RepoLink, repo_relative_path};
use crate::location::{Location, RepoType};

/// Builds `-/blob/{branch}/{path}` URLs. Single lines anchor as `#L15`;
/// ranges as `#L15-20`, with the `L` prefix on the start line only.
pub struct GitlabRepoLink;

impl RepoLink for GitlabRepoLink {
    fn supports(&self, repo_type: RepoType) -> bool {
        repo_type == RepoType::Gitlab
    }

    fn code_href(&self, loc: &Location) -> Result<String> {
        let repo = loc
            .repo
            .as_ref()
            .context("location has no repository metadata")?;
        let path = repo_relative_path(loc)?;

        let line_ref = if loc.start.line == loc.end.line {
            format!("L{}", loc.start.line)
        } else {
            format!("L{}-{}", loc.start.line, loc.end.line)
        };

        Ok(format!(
            "{}/-/blob/{}/{}#{}",
            repo.remote, repo.default_branch, path, line_ref
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::{Position, Repo};
    use std::path::PathBuf;

    fn location(start_line: usize, end_line: usize) -> Location {
        Location {
            start: Position {
                line: start_line,
                col: 1,
            },
            end: Position {
                line: end_line,
                col: 1,
            },
            filepath: PathBuf::from("/wd/src/lib.rs"),
            work_dir: PathBuf::from("/wd"),
            repo: Some(Repo {
                repo_type: RepoType::Gitlab,
                remote: "https://gitlab.example.com/user/repo".to_string(),
                default_branch: "main".to_string(),
                path_from_root: PathBuf::from("/"),
            }),
        }
    }

    #[test]
    fn test_code_href_single_line() {
        let link = GitlabRepoLink;
        let href = link.code_href(&location(15, 15)).unwrap();
        assert_eq!(
            href,
            "https://gitlab.example.com/user/repo/-/blob/main/src/lib.rs#L15"
        );
    }

    #[test]
    fn test_code_href_range() {
        let link = GitlabRepoLink;
        let href = link.code_href(&location(15, 20)).unwrap();
        assert_eq!(
            href,
            "https://gitlab.example.com/user/repo/-/blob/main/src/lib.rs#L15-20"
        );
    }

    #[test]
    fn test_supports() {
        let link = GitlabRepoLink;
        assert!(link.supports(RepoType::Gitlab));
        assert!(!link.supports(RepoType::Github));
    }
}
