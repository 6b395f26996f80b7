use crate::error::{InstallError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CODEXSKILLS_DIR: &str = ".codexskills";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Directory looked up at the repo root when the spec carries no sub-path.
    pub default_collection: String,
    pub clone_depth: u32,
    /// Probe for a `trash` command before falling back to a recursive delete.
    pub use_trash: bool,
    pub temp_dir: Option<PathBuf>,
    #[serde(skip)]
    pub home_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_collection: "skills".to_string(),
            clone_depth: 1,
            use_trash: true,
            temp_dir: None,
            home_dir: None,
        }
    }
}

impl Config {
    pub fn home_dir(&self) -> Result<PathBuf> {
        self.home_dir
            .clone()
            .or_else(dirs::home_dir)
            .ok_or(InstallError::HomeDirUnavailable)
    }

    pub fn temp_root(&self) -> PathBuf {
        self.temp_dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match get_config_path() {
                Some(path) => path,
                None => return Ok(Config::default()),
            },
        };

        if path.exists() {
            load_config(&path)
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn get_codexskills_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CODEXSKILLS_DIR))
}

pub fn get_config_path() -> Option<PathBuf> {
    get_codexskills_dir().map(|dir| dir.join("config.toml"))
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| InstallError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    toml::from_str(&content).map_err(|e| InstallError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
