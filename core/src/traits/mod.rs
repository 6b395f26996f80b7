pub mod fetcher;
pub mod selector;

pub use fetcher::Fetcher;
pub use selector::Selector;
