pub mod config;
pub mod error;
pub mod install;
pub mod select;
pub mod skills;
pub mod source;
pub mod traits;
pub mod workspace;

pub use config::Config;
pub use error::{InstallError, Result};
pub use install::{InstallOrchestrator, InstallReport, InstallRequest, Scope};
pub use select::{SelectionKey, SelectionPhase, SelectionRow, SelectionState};
pub use skills::{MARKER_FILE, SkillSource, UnitDirectory};
pub use source::{GitFetcher, RepoReference};
pub use traits::*;
pub use workspace::{CleanupStrategy, ReleaseOutcome, TempWorkspace};
