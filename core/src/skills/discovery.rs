use super::{UnitDirectory, has_marker};
use crate::error::{InstallError, Result};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillSource {
    /// The source directory is itself a skill.
    Single(UnitDirectory),
    /// Skills found one level below a collection directory, sorted by name.
    Collection(Vec<UnitDirectory>),
}

/// Picks the directory to install from: the explicit sub-path, else the
/// default collection directory when the repo has one, else the repo root.
pub fn locate_source(root: &Path, sub_path: &str, default_collection: &str) -> Result<PathBuf> {
    let source = if !sub_path.is_empty() {
        root.join(sub_path)
    } else {
        let collection = root.join(default_collection);
        if collection.is_dir() {
            collection
        } else {
            root.to_path_buf()
        }
    };

    let shown = if sub_path.is_empty() { "." } else { sub_path };

    if !source.exists() {
        return Err(InstallError::NotFound(shown.to_string()));
    }
    if !source.is_dir() {
        return Err(InstallError::NotADirectory(PathBuf::from(shown)));
    }

    tracing::debug!(source = %source.display(), "Located source");
    Ok(source)
}

pub fn discover_units(source: &Path) -> Result<SkillSource> {
    if has_marker(source)? {
        return Ok(SkillSource::Single(UnitDirectory::new(source.to_path_buf())));
    }

    let entries = fs::read_dir(source)
        .map_err(|e| InstallError::io(format!("Failed to read {}", source.display()), e))?;

    let mut units = Vec::new();
    let mut skipped = 0;

    for entry in entries {
        let entry = entry
            .map_err(|e| InstallError::io(format!("Failed to read {}", source.display()), e))?;
        let path = entry.path();

        if !path.is_dir() {
            continue;
        }

        if has_marker(&path)? {
            units.push(UnitDirectory::new(path));
        } else {
            skipped += 1;
        }
    }

    if units.is_empty() {
        return Err(InstallError::NoUnitsFound);
    }

    units.sort_by(|a, b| a.name.cmp(&b.name));

    tracing::debug!(
        found = units.len(),
        skipped,
        source = %source.display(),
        "Discovered skills"
    );

    Ok(SkillSource::Collection(units))
}
