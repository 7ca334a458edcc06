use crate::catalog::store::Catalog;
use crate::catalog::types::MonasteryRecord;
use crate::config::{MAX_RECOMMENDATIONS, RECOMMEND_DISTRICT_WEIGHT, RECOMMEND_TAG_WEIGHT};
use std::collections::HashSet;

/// Suggests unvisited monasteries that resemble the visited ones.
///
/// Each visited monastery adds `RECOMMEND_DISTRICT_WEIGHT` to a candidate in the same
/// district and `RECOMMEND_TAG_WEIGHT` per shared tag. Visited ids unknown to the catalog
/// add nothing but are still never recommended.
pub fn recommend<'a>(catalog: &'a Catalog, visited: &HashSet<String>) -> Vec<&'a MonasteryRecord> {
    let recent: Vec<&MonasteryRecord> = catalog
        .monasteries()
        .iter()
        .filter(|m| visited.contains(&m.id))
        .collect();

    if recent.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(&MonasteryRecord, u32)> = catalog
        .monasteries()
        .iter()
        .filter(|m| !visited.contains(&m.id))
        .map(|m| (m, affinity(m, &recent)))
        .filter(|(_, score)| *score > 0)
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .map(|(m, _)| m)
        .collect()
}

pub fn affinity(candidate: &MonasteryRecord, recent: &[&MonasteryRecord]) -> u32 {
    recent
        .iter()
        .map(|r| {
            let district = if candidate.district == r.district {
                RECOMMEND_DISTRICT_WEIGHT
            } else {
                0
            };
            let shared_tags = candidate
                .tags
                .iter()
                .filter(|tag| r.tags.contains(tag))
                .count() as u32;
            district + RECOMMEND_TAG_WEIGHT * shared_tags
        })
        .sum()
}
