pub mod git;
pub mod spec;

pub use git::GitFetcher;
pub use spec::RepoReference;
