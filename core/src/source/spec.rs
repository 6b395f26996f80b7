use crate::error::{InstallError, Result};
use std::fmt;

const GITHUB_HOST: &str = "github.com";

/// A GitHub repository plus an optional path inside it, parsed from
/// `owner/repo[/path]` or a full `https://github.com/...` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoReference {
    pub owner: String,
    pub repo: String,
    pub sub_path: String,
}

impl RepoReference {
    pub fn resolve(raw_spec: &str) -> Result<Self> {
        let trimmed = raw_spec.trim();
        let without_scheme = match trimmed.split_once("://") {
            Some((scheme, rest)) if is_scheme(scheme) => rest,
            _ => trimmed,
        };
        let cleaned = without_scheme
            .strip_suffix(".git")
            .unwrap_or(without_scheme);

        let mut parts: Vec<&str> = cleaned.split('/').filter(|p| !p.is_empty()).collect();

        // Full URLs still carry the host after the scheme is gone.
        if parts.first().is_some_and(|p| p.contains('.')) {
            parts.remove(0);
        }

        if parts.len() < 2 {
            return Err(InstallError::InvalidSpec(raw_spec.to_string()));
        }

        if parts[2..].iter().any(|p| *p == "..") {
            return Err(InstallError::InvalidSpec(raw_spec.to_string()));
        }

        Ok(RepoReference {
            owner: parts[0].to_string(),
            repo: parts[1].to_string(),
            sub_path: parts[2..].join("/"),
        })
    }

    /// The clone URL is always synthesized against GitHub over HTTPS,
    /// whatever scheme the user typed.
    pub fn clone_url(&self) -> String {
        format!("https://{}/{}/{}.git", GITHUB_HOST, self.owner, self.repo)
    }

    pub fn has_sub_path(&self) -> bool {
        !self.sub_path.is_empty()
    }
}

impl fmt::Display for RepoReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)?;
        if self.has_sub_path() {
            write!(f, "/{}", self.sub_path)?;
        }
        Ok(())
    }
}

fn is_scheme(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
