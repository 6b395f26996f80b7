use crate::error::{InstallError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

const TEMP_PREFIX: &str = "codexskills-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupStrategy {
    /// Hand the directory to a trash command, falling back to deletion.
    Trash(PathBuf),
    Remove,
}

impl CleanupStrategy {
    /// Probes PATH for `trash` once.
    pub fn detect(use_trash: bool) -> Self {
        if !use_trash {
            return CleanupStrategy::Remove;
        }
        match which::which("trash") {
            Ok(path) => CleanupStrategy::Trash(path),
            Err(_) => CleanupStrategy::Remove,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    Trashed,
    Removed,
    /// Teardown failed; logged as a warning and otherwise ignored.
    Failed,
    AlreadyReleased,
}

/// A uniquely named scratch directory that is torn down exactly once,
/// either by an explicit `release` or on drop.
#[derive(Debug)]
pub struct TempWorkspace {
    path: PathBuf,
    alive: bool,
    cleanup: CleanupStrategy,
}

impl TempWorkspace {
    pub fn acquire(temp_root: &Path, cleanup: CleanupStrategy) -> Result<Self> {
        let path = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .tempdir_in(temp_root)
            .map_err(|e| {
                InstallError::io(
                    format!("Failed to create temp dir in {}", temp_root.display()),
                    e,
                )
            })?
            .keep();

        tracing::debug!(path = %path.display(), "Acquired temp workspace");

        Ok(Self {
            path,
            alive: true,
            cleanup,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn release(&mut self) -> ReleaseOutcome {
        if !self.alive {
            return ReleaseOutcome::AlreadyReleased;
        }
        self.alive = false;

        if let CleanupStrategy::Trash(program) = &self.cleanup {
            let trashed = Command::new(program)
                .arg(&self.path)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .is_ok_and(|status| status.success());
            if trashed {
                return ReleaseOutcome::Trashed;
            }
            tracing::debug!(program = %program.display(), "Trash failed, removing instead");
        }

        match std::fs::remove_dir_all(&self.path) {
            Ok(()) => ReleaseOutcome::Removed,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => ReleaseOutcome::Removed,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Unable to clean up temp dir"
                );
                ReleaseOutcome::Failed
            }
        }
    }
}

impl Drop for TempWorkspace {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entries(dir: &Path) -> usize {
        std::fs::read_dir(dir).unwrap().count()
    }

    #[test]
    fn acquire_creates_unique_dirs() {
        let root = TempDir::new().unwrap();
        let a = TempWorkspace::acquire(root.path(), CleanupStrategy::Remove).unwrap();
        let b = TempWorkspace::acquire(root.path(), CleanupStrategy::Remove).unwrap();

        assert_ne!(a.path(), b.path());
        assert!(a.path().is_dir());
        assert!(
            a.path()
                .file_name()
                .unwrap()
                .to_string_lossy()
                .starts_with(TEMP_PREFIX)
        );
    }

    #[test]
    fn release_removes_tree_once() {
        let root = TempDir::new().unwrap();
        let mut ws = TempWorkspace::acquire(root.path(), CleanupStrategy::Remove).unwrap();
        std::fs::create_dir_all(ws.path().join("nested/deeper")).unwrap();
        std::fs::write(ws.path().join("nested/deeper/file"), "x").unwrap();

        assert_eq!(ws.release(), ReleaseOutcome::Removed);
        assert!(!ws.is_alive());
        assert_eq!(entries(root.path()), 0);
        assert_eq!(ws.release(), ReleaseOutcome::AlreadyReleased);
    }

    #[test]
    fn failing_trash_falls_back_to_remove() {
        let root = TempDir::new().unwrap();
        let strategy = CleanupStrategy::Trash(PathBuf::from("codexskills-no-such-trash"));
        let mut ws = TempWorkspace::acquire(root.path(), strategy).unwrap();
        std::fs::write(ws.path().join("file"), "x").unwrap();

        assert_eq!(ws.release(), ReleaseOutcome::Removed);
        assert_eq!(entries(root.path()), 0);
    }

    #[cfg(unix)]
    #[test]
    fn trash_exiting_non_zero_falls_back_to_remove() {
        let root = TempDir::new().unwrap();
        let strategy = CleanupStrategy::Trash(PathBuf::from("false"));
        let mut ws = TempWorkspace::acquire(root.path(), strategy).unwrap();

        assert_eq!(ws.release(), ReleaseOutcome::Removed);
        assert_eq!(entries(root.path()), 0);
    }

    #[test]
    fn drop_releases() {
        let root = TempDir::new().unwrap();
        {
            let _ws = TempWorkspace::acquire(root.path(), CleanupStrategy::Remove).unwrap();
            assert_eq!(entries(root.path()), 1);
        }
        assert_eq!(entries(root.path()), 0);
    }

    #[test]
    fn already_deleted_dir_counts_as_removed() {
        let root = TempDir::new().unwrap();
        let mut ws = TempWorkspace::acquire(root.path(), CleanupStrategy::Remove).unwrap();
        std::fs::remove_dir_all(ws.path()).unwrap();
        assert_eq!(ws.release(), ReleaseOutcome::Removed);
    }

    #[test]
    fn removal_failure_is_reported_not_raised() {
        let root = TempDir::new().unwrap();
        let mut ws = TempWorkspace::acquire(root.path(), CleanupStrategy::Remove).unwrap();
        std::fs::remove_dir_all(ws.path()).unwrap();
        std::fs::write(ws.path(), "not a directory").unwrap();

        assert_eq!(ws.release(), ReleaseOutcome::Failed);
        assert!(!ws.is_alive());
        assert_eq!(ws.release(), ReleaseOutcome::AlreadyReleased);
    }

    #[test]
    fn detect_without_trash_opt_in() {
        assert_eq!(CleanupStrategy::detect(false), CleanupStrategy::Remove);
    }
}
