use crate::error::Result;
use crate::source::RepoReference;
use async_trait::async_trait;
use std::path::Path;

#[async_trait]
pub trait Fetcher: Send + Sync {
    fn name(&self) -> &str;

    /// Checks host prerequisites. Runs before any workspace is created or
    /// any network traffic happens.
    fn ensure_available(&self) -> Result<()> {
        Ok(())
    }

    /// Materializes the repository's tree into `dest`, which already exists
    /// and is empty.
    async fn fetch(&self, repo: &RepoReference, dest: &Path) -> Result<()>;
}
