pub mod discovery;
pub mod installer;

pub use discovery::{SkillSource, discover_units, locate_source};
pub use installer::install_unit;

use crate::error::{InstallError, Result};
use std::path::{Path, PathBuf};

/// A directory is an installable skill iff it directly holds this file.
pub const MARKER_FILE: &str = "SKILL.md";

/// `<base>/.codex/skills`
pub fn skills_dir(base: &Path) -> PathBuf {
    base.join(".codex").join("skills")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitDirectory {
    pub path: PathBuf,
    /// Display label and destination directory name.
    pub name: String,
}

impl UnitDirectory {
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }

    pub fn renamed(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }
}

/// Exact, case-sensitive check for the marker among `dir`'s entries, so a
/// case-insensitive filesystem does not accept `skill.md`.
pub fn has_marker(dir: &Path) -> Result<bool> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| InstallError::io(format!("Failed to read {}", dir.display()), e))?;

    for entry in entries {
        let entry =
            entry.map_err(|e| InstallError::io(format!("Failed to read {}", dir.display()), e))?;
        if entry.file_name() == MARKER_FILE && entry.path().is_file() {
            return Ok(true);
        }
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn marker_must_match_exactly() {
        let tmp = TempDir::new().unwrap();
        let lower = tmp.path().join("lower");
        fs::create_dir_all(&lower).unwrap();
        fs::write(lower.join("skill.md"), "# lower").unwrap();

        let exact = tmp.path().join("exact");
        fs::create_dir_all(&exact).unwrap();
        fs::write(exact.join("SKILL.md"), "# exact").unwrap();

        assert!(!has_marker(&lower).unwrap());
        assert!(has_marker(&exact).unwrap());
    }

    #[test]
    fn marker_directory_does_not_count() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("SKILL.md")).unwrap();
        assert!(!has_marker(tmp.path()).unwrap());
    }

    #[test]
    fn unit_name_is_basename() {
        let unit = UnitDirectory::new(PathBuf::from("/tmp/x/skills/alpha"));
        assert_eq!(unit.name, "alpha");
        assert_eq!(unit.renamed("widgets").name, "widgets");
    }

    #[test]
    fn skills_dir_layout() {
        assert_eq!(
            skills_dir(Path::new("/home/me")),
            PathBuf::from("/home/me/.codex/skills")
        );
    }
}
