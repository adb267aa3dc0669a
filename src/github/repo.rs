use anyhow::{Result, anyhow};
use std::str::FromStr;

#[derive(Debug, PartialEq, Clone)]
pub struct GitHubRepo {
    pub owner: String,
    pub repo: String,
}

impl std::fmt::Display for GitHubRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl FromStr for GitHubRepo {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            Err(anyhow!("Invalid repository format. Expected 'owner/repo'."))
        } else {
            Ok(GitHubRepo {
                owner: parts[0].to_string(),
                repo: parts[1].to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_github_repo_valid() {
        let repo = GitHubRepo::from_str("owner/repo").unwrap();
        assert_eq!(
            repo,
            GitHubRepo {
                owner: "owner".to_string(),
                repo: "repo".to_string()
            }
        );
    }

    #[test]
    fn test_parse_github_repo_missing_owner_fails() {
        assert!(GitHubRepo::from_str("/repo").is_err());
    }

    #[test]
    fn test_parse_github_repo_missing_repo_fails() {
        assert!(GitHubRepo::from_str("owner/").is_err());
    }

    #[test]
    fn test_parse_github_repo_too_many_parts_fails() {
        assert!(GitHubRepo::from_str("a/b/c").is_err());
    }

    #[test]
    fn test_display() {
        let repo = GitHubRepo {
            owner: "giancosta86".to_string(),
            repo: "moondeploy".to_string(),
        };
        assert_eq!(repo.to_string(), "giancosta86/moondeploy");
    }
}
