use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, InstallError>;

/// Every failure the install pipeline can surface. None of these are retried;
/// the binary prints the message and exits non-zero.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("Invalid repo spec '{0}'. Use owner/repo[/path].")]
    InvalidSpec(String),

    #[error("Missing required command: {0}")]
    MissingDependency(String),

    #[error("Git clone failed for {url}: {detail}")]
    Fetch { url: String, detail: String },

    #[error("Path not found in repo: {0}")]
    NotFound(String),

    #[error("Source path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("No skills found. Ensure SKILL.md exists in each skill folder.")]
    NoUnitsFound,

    #[error("Multiple skills found but no TTY for selection. Use --all or specify a skill path.")]
    NoInteractiveTerminal,

    #[error("Aborted.")]
    Aborted,

    #[error("No skills selected.")]
    NoSkillsSelected,

    #[error("Could not determine the home directory")]
    HomeDirUnavailable,

    #[error("Failed to read config from {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk {}: {source}", .root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl InstallError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_keeps_context() {
        let err = InstallError::io(
            "Failed to create /tmp/x",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "Failed to create /tmp/x: denied");
    }

    #[test]
    fn user_facing_messages() {
        assert_eq!(InstallError::Aborted.to_string(), "Aborted.");
        assert_eq!(
            InstallError::MissingDependency("git".into()).to_string(),
            "Missing required command: git"
        );
        assert!(
            InstallError::InvalidSpec("octo".into())
                .to_string()
                .contains("owner/repo[/path]")
        );
    }
}
