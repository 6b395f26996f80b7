use crate::config::Config;
use crate::error::{InstallError, Result};
use crate::skills::skills_dir;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    User,
    Project,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRequest {
    pub scope: Scope,
    pub raw_spec: String,
    pub project_path: Option<PathBuf>,
    /// Skip the picker and install every discovered skill.
    pub install_all: bool,
}

impl InstallRequest {
    /// `<home>/.codex/skills` for user scope, `<project or cwd>/.codex/skills`
    /// for project scope. Nothing is created here.
    pub fn target_root(&self, config: &Config) -> Result<PathBuf> {
        match self.scope {
            Scope::User => Ok(skills_dir(&config.home_dir()?)),
            Scope::Project => {
                let cwd = std::env::current_dir()
                    .map_err(|e| InstallError::io("Failed to read current directory", e))?;
                Ok(project_target_root(self.project_path.as_deref(), &cwd))
            }
        }
    }
}

fn project_target_root(project_path: Option<&Path>, cwd: &Path) -> PathBuf {
    let base = match project_path {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => cwd.join(path),
        None => cwd.to_path_buf(),
    };
    skills_dir(&base)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(scope: Scope, project_path: Option<&str>) -> InstallRequest {
        InstallRequest {
            scope,
            raw_spec: "octo/widgets".into(),
            project_path: project_path.map(PathBuf::from),
            install_all: false,
        }
    }

    #[test]
    fn user_scope_uses_home() {
        let config = Config {
            home_dir: Some(PathBuf::from("/home/octo")),
            ..Default::default()
        };
        let root = request(Scope::User, None).target_root(&config).unwrap();
        assert_eq!(root, PathBuf::from("/home/octo/.codex/skills"));
    }

    #[test]
    fn project_scope_without_path_uses_cwd() {
        let cwd = std::env::current_dir().unwrap();
        let root = request(Scope::Project, None)
            .target_root(&Config::default())
            .unwrap();
        assert_eq!(root, cwd.join(".codex").join("skills"));
    }

    #[test]
    fn relative_project_path_is_anchored_at_cwd() {
        let root = project_target_root(Some(Path::new("my-repo")), Path::new("/work"));
        assert_eq!(root, PathBuf::from("/work/my-repo/.codex/skills"));
    }

    #[test]
    fn absolute_project_path_is_kept() {
        let root = project_target_root(Some(Path::new("/srv/app")), Path::new("/work"));
        assert_eq!(root, PathBuf::from("/srv/app/.codex/skills"));
    }
}
