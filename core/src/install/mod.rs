pub mod request;

pub use request::{InstallRequest, Scope};

use crate::config::Config;
use crate::error::{InstallError, Result};
use crate::skills::{SkillSource, UnitDirectory, discover_units, install_unit, locate_source};
use crate::source::RepoReference;
use crate::traits::{Fetcher, Selector};
use crate::workspace::{CleanupStrategy, TempWorkspace};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    /// One destination per installed skill, in install order.
    pub installed: Vec<PathBuf>,
}

/// Runs the whole install: resolve, fetch into a temp workspace, discover,
/// optionally prompt, copy. The workspace is released on every exit path.
pub struct InstallOrchestrator {
    config: Config,
    fetcher: Arc<dyn Fetcher>,
    selector: Box<dyn Selector>,
}

impl InstallOrchestrator {
    pub fn new(config: Config, fetcher: Arc<dyn Fetcher>, selector: Box<dyn Selector>) -> Self {
        Self {
            config,
            fetcher,
            selector,
        }
    }

    pub async fn run(&self, request: &InstallRequest) -> Result<InstallReport> {
        let repo = RepoReference::resolve(&request.raw_spec)?;
        tracing::debug!(repo = %repo, url = %repo.clone_url(), "Resolved spec");

        let target_root = request.target_root(&self.config)?;
        self.fetcher.ensure_available()?;

        let mut workspace = TempWorkspace::acquire(
            &self.config.temp_root(),
            CleanupStrategy::detect(self.config.use_trash),
        )?;

        let result = self
            .install_from(&repo, workspace.path(), &target_root, request.install_all)
            .await;

        workspace.release();
        result
    }

    async fn install_from(
        &self,
        repo: &RepoReference,
        fetched_root: &Path,
        target_root: &Path,
        install_all: bool,
    ) -> Result<InstallReport> {
        tracing::debug!(fetcher = self.fetcher.name(), repo = %repo, "Fetching");
        self.fetcher.fetch(repo, fetched_root).await?;

        let source = locate_source(fetched_root, &repo.sub_path, &self.config.default_collection)?;

        let units = match discover_units(&source)? {
            // A skill at the repo root would otherwise be named after the temp dir.
            SkillSource::Single(unit) if source == fetched_root => vec![unit.renamed(&repo.repo)],
            SkillSource::Single(unit) => vec![unit],
            SkillSource::Collection(units) if install_all || units.len() == 1 => units,
            SkillSource::Collection(units) => self.pick(units)?,
        };

        let mut report = InstallReport::default();
        for unit in &units {
            report.installed.push(install_unit(unit, target_root)?);
        }

        tracing::info!(
            count = report.installed.len(),
            target = %target_root.display(),
            "Skills installed"
        );

        Ok(report)
    }

    fn pick(&self, units: Vec<UnitDirectory>) -> Result<Vec<UnitDirectory>> {
        let names: Vec<String> = units.iter().map(|u| u.name.clone()).collect();
        let flags = self.selector.select(&names)?;

        let picked: Vec<UnitDirectory> = units
            .into_iter()
            .zip(flags)
            .filter_map(|(unit, keep)| keep.then_some(unit))
            .collect();

        if picked.is_empty() {
            return Err(InstallError::NoSkillsSelected);
        }

        Ok(picked)
    }
}
