use super::UnitDirectory;
use crate::error::{InstallError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Copies `unit` to `target_root/<unit name>` and returns the destination.
///
/// Creates `target_root` if needed. Files already present at the destination
/// are overwritten; files the unit does not carry are left alone.
pub fn install_unit(unit: &UnitDirectory, target_root: &Path) -> Result<PathBuf> {
    fs::create_dir_all(target_root).map_err(|e| {
        InstallError::io(format!("Failed to create {}", target_root.display()), e)
    })?;

    let dest = target_root.join(&unit.name);
    copy_dir_recursive(&unit.path, &dest)?;

    tracing::debug!(skill = %unit.name, dest = %dest.display(), "Installed skill");
    Ok(dest)
}

fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<()> {
    // Links below the root are recreated as links, never followed.
    let walker = WalkDir::new(src)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || entry.file_name() != ".git");

    for entry in walker {
        let entry = entry.map_err(|e| InstallError::Walk {
            root: src.to_path_buf(),
            source: e,
        })?;

        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dest.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            if is_symlink(&target) {
                remove_existing(&target)?;
            }
            fs::create_dir_all(&target).map_err(|e| {
                InstallError::io(format!("Failed to create {}", target.display()), e)
            })?;
        } else if file_type.is_symlink() {
            remove_existing(&target)?;
            copy_symlink(entry.path(), &target)?;
        } else {
            if is_symlink(&target) {
                remove_existing(&target)?;
            }
            fs::copy(entry.path(), &target).map_err(|e| {
                InstallError::io(
                    format!(
                        "Failed to copy {} to {}",
                        entry.path().display(),
                        target.display()
                    ),
                    e,
                )
            })?;
        }
    }

    Ok(())
}

/// A link left at `path` by an earlier install would otherwise be written through.
fn is_symlink(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink())
}

fn remove_existing(target: &Path) -> Result<()> {
    let Ok(meta) = fs::symlink_metadata(target) else {
        return Ok(());
    };
    let removed = if meta.is_dir() {
        fs::remove_dir_all(target)
    } else {
        fs::remove_file(target)
    };
    removed.map_err(|e| InstallError::io(format!("Failed to replace {}", target.display()), e))
}

fn copy_symlink(link: &Path, target: &Path) -> Result<()> {
    let points_to = fs::read_link(link)
        .map_err(|e| InstallError::io(format!("Failed to read link {}", link.display()), e))?;

    #[cfg(unix)]
    let created = std::os::unix::fs::symlink(&points_to, target);

    #[cfg(windows)]
    let created = if link.is_dir() {
        std::os::windows::fs::symlink_dir(&points_to, target)
    } else {
        std::os::windows::fs::symlink_file(&points_to, target)
    };

    #[cfg(not(any(unix, windows)))]
    let created: std::io::Result<()> = Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        format!("cannot recreate link to {}", points_to.display()),
    ));

    created.map_err(|e| InstallError::io(format!("Failed to link {}", target.display()), e))
}
