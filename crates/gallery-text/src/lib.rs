pub mod fields;
pub mod search;

pub use search::{filter_platform, matches, search, TextSearchEngine};
