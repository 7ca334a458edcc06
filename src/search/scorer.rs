use crate::config::{SCORE_EXACT, SCORE_PREFIX, SCORE_SUBSTRING};

/// Scores `haystack` against `needle` on a fixed ladder: exact, prefix, substring.
///
/// Comparison is case-insensitive; trimming is left to the caller. The first rung
/// that matches wins. An empty needle is a prefix of everything, so it scores
/// `SCORE_PREFIX` against any non-empty haystack and `SCORE_EXACT` against an empty one.
pub fn score(haystack: &str, needle: &str) -> u32 {
    let haystack = haystack.to_lowercase();
    let needle = needle.to_lowercase();

    if haystack == needle {
        SCORE_EXACT
    } else if haystack.starts_with(&needle) {
        SCORE_PREFIX
    } else if haystack.contains(&needle) {
        SCORE_SUBSTRING
    } else {
        0
    }
}

/// Best score over several fields; 0 when there are none.
pub fn best_score<'a, I>(fields: I, needle: &str) -> u32
where
    I: IntoIterator<Item = &'a str>,
{
    fields
        .into_iter()
        .map(|field| score(field, needle))
        .max()
        .unwrap_or(0)
}
