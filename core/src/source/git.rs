use crate::error::{InstallError, Result};
use crate::source::RepoReference;
use crate::traits::Fetcher;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Shallow-clones repositories with the host's `git`.
pub struct GitFetcher {
    program: String,
    depth: u32,
}

impl GitFetcher {
    pub fn new(depth: u32) -> Self {
        Self {
            program: "git".to_string(),
            depth: depth.max(1),
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }
}

impl Default for GitFetcher {
    fn default() -> Self {
        Self::new(1)
    }
}

#[async_trait]
impl Fetcher for GitFetcher {
    fn name(&self) -> &str {
        "git"
    }

    fn ensure_available(&self) -> Result<()> {
        which::which(&self.program)
            .map(|_| ())
            .map_err(|_| InstallError::MissingDependency(self.program.clone()))
    }

    async fn fetch(&self, repo: &RepoReference, dest: &Path) -> Result<()> {
        let url = repo.clone_url();
        tracing::debug!(url = %url, dest = %dest.display(), depth = self.depth, "Cloning");

        let output = Command::new(&self.program)
            .arg("clone")
            .arg("--depth")
            .arg(self.depth.to_string())
            .arg(&url)
            .arg(dest)
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| InstallError::io(format!("Failed to run {}", self.program), e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = if stderr.trim().is_empty() {
                format!("exited with {}", output.status)
            } else {
                stderr.trim().to_string()
            };
            return Err(InstallError::Fetch { url, detail });
        }

        Ok(())
    }
}
