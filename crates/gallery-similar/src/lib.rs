//! gallery-similar
//!
//! Weighted "similar wallpapers" ranking and the page-sized reveal used to
//! present it. Page size is always supplied by the caller.

pub mod paging;
pub mod rank;
pub mod reveal;
pub mod score;

pub use paging::{page, page_count};
pub use rank::{find_reference, rank_scored, rank_similar, ScoredCandidate, SimilarityEngine};
pub use reveal::{PageRequest, RevealCursor, RevealState};
pub use score::{score, SimilarityWeights};
