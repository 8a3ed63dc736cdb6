//! Matching Module
//!
//! Computes and caches each user's daily list of candidate matches.
//!
//! - **`scorer`** - Candidate filtering, scoring and ranking
//! - **`service`** - Cached `get_matches` entry point
//! - **`handlers`** - HTTP handler for `GET /match`

pub mod handlers;
pub mod scorer;
pub mod service;

pub use scorer::{rank, score_candidate, MatchScorer, DEFAULT_MATCH_LIMIT};
pub use service::MatchService;
