//! Global configuration constants.
//!
//! Result limits, score tiers and recommendation weights are observable behaviour of
//! `/api/search`, so they live here as compile-time constants rather than runtime flags.
//! Runtime configuration (bind address, catalog source) is handled via CLI arguments
//! and environment variables in `main.rs`.

use std::time::Duration;

/// Score for a field that equals the query exactly (case-insensitive).
pub const SCORE_EXACT: u32 = 100;

/// Score for a field that starts with the query.
pub const SCORE_PREFIX: u32 = 80;

/// Score for a field that contains the query anywhere else.
pub const SCORE_SUBSTRING: u32 = 60;

/// Fixed score given to festivals pulled in because their monastery matched.
///
/// Sits above every text tier so related festivals always rank first.
pub const SCORE_RELATED_FESTIVAL: u32 = 1000;

/// Maximum number of monastery hits returned per search.
pub const MAX_MONASTERY_RESULTS: usize = 10;

/// Maximum number of archive hits returned per search.
pub const MAX_ARCHIVE_RESULTS: usize = 10;

/// Maximum number of recommended monasteries.
pub const MAX_RECOMMENDATIONS: usize = 6;

/// Added once per visited monastery in the same district as the candidate.
pub const RECOMMEND_DISTRICT_WEIGHT: u32 = 30;

/// Added per tag a candidate shares with a visited monastery.
pub const RECOMMEND_TAG_WEIGHT: u32 = 10;

/// Default HTTP bind address.
pub const DEFAULT_BIND: &str = "0.0.0.0:8080";

/// Attempts made when fetching a remote catalog before giving up.
pub const CATALOG_FETCH_ATTEMPTS: usize = 3;

/// Per-attempt timeout for remote catalog fetches.
pub const CATALOG_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// First retry delay; doubled after each failed attempt.
pub const CATALOG_RETRY_BASE_MS: u64 = 150;

/// Upper bound for the retry delay.
pub const CATALOG_RETRY_MAX_MS: u64 = 1200;
