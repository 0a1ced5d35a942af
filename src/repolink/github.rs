//! GitHub source browser links.

use anyhow::{Context, Result};

use super::{RepoLink, repo_relative_path};
use crate::location::{Location, RepoType};

/// Builds `blob/{branch}/{path}` URLs with `L`-prefixed line anchors.
///
/// The branch ref is embedded directly as a path segment, matching how
/// GitHub resolves refs containing slashes.
pub struct GithubRepoLink;

impl RepoLink for GithubRepoLink {
    fn supports(&self, repo_type: RepoType) -> bool {
        repo_type == RepoType::Github
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
            format!("L{}-L{}", loc.start.line, loc.end.line)
        };

        Ok(format!(
            "{}/blob/{}/{}#{}",
            repo.remote, repo.default_branch, path, line_ref
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::{Position, Repo};
    use std::path::PathBuf;

    fn location(start_line: usize, end_line: usize, branch: &str, root: &str) -> Location {
        Location {
            start: Position {
                line: start_line,
                col: 8,
            },
            end: Position {
                line: end_line,
                col: 60,
            },
            filepath: PathBuf::from("/some/path/to/workdir/file.rs"),
            work_dir: PathBuf::from("/some/path/to/workdir"),
            repo: Some(Repo {
                repo_type: RepoType::Github,
                remote: "https://some.git.repo.com/user/repo".to_string(),
                default_branch: branch.to_string(),
                path_from_root: PathBuf::from(root),
            }),
        }
    }

    #[test]
    fn test_code_href_single_line() {
        let link = GithubRepoLink;
        let href = link
            .code_href(&location(15, 15, "master", "/path/to/sources"))
            .unwrap();
        assert_eq!(
            href,
            "https://some.git.repo.com/user/repo/blob/master/path/to/sources/file.rs#L15"
        );
    }

    #[test]
    fn test_code_href_range() {
        let link = GithubRepoLink;
        let href = link.code_href(&location(15, 20, "main", "/")).unwrap();
        assert_eq!(
            href,
            "https://some.git.repo.com/user/repo/blob/main/file.rs#L15-L20"
        );
    }

    #[test]
    fn test_code_href_branch_with_slash_raw() {
        // GitHub refs with slashes stay unencoded in the path
        let link = GithubRepoLink;
        let href = link.code_href(&location(3, 3, "fix/delay", "/")).unwrap();
        assert_eq!(
            href,
            "https://some.git.repo.com/user/repo/blob/fix/delay/file.rs#L3"
        );
    }

    #[test]
    fn test_supports() {
        let link = GithubRepoLink;
        assert!(link.supports(RepoType::Github));
        assert!(!link.supports(RepoType::Bitbucket));
        assert!(!link.supports(RepoType::Gitlab));
    }
}
