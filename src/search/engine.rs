use super::recommend::recommend;
use super::scorer::best_score;
use super::types::{FestivalHit, HitKind, ScoredHit, SearchCategories, SearchResult};
use crate::catalog::store::Catalog;
use crate::catalog::types::{ArchiveRecord, MonasteryRecord};
use crate::config::{MAX_ARCHIVE_RESULTS, MAX_MONASTERY_RESULTS, SCORE_RELATED_FESTIVAL};
use std::collections::HashSet;

/// Runs one aggregate search over the catalog.
///
/// Monasteries and archives are scored independently. Festivals come from two places:
/// every festival of a matched monastery (forced to `SCORE_RELATED_FESTIVAL`), and any
/// festival whose own text matches. Recommendations depend only on `visited`.
///
/// An empty (or whitespace-only) query disables filtering, so every record passes.
pub fn search<'a>(
    catalog: &'a Catalog,
    query: &str,
    visited: &HashSet<String>,
) -> SearchResult<'a> {
    let needle = query.trim().to_lowercase();
    let keep_all = needle.is_empty();

    let monastery_hits = rank(
        catalog
            .monasteries()
            .iter()
            .map(|m| ScoredHit {
                kind: HitKind::Monastery,
                score: monastery_score(m, &needle),
                item: m,
            })
            .collect(),
        keep_all,
        Some(MAX_MONASTERY_RESULTS),
    );

    let archive_hits = rank(
        catalog
            .archives()
            .iter()
            .map(|a| ScoredHit {
                kind: HitKind::Archive,
                score: archive_score(a, &needle),
                item: a,
            })
            .collect(),
        keep_all,
        Some(MAX_ARCHIVE_RESULTS),
    );

    let matched = matched_monasteries(catalog, &monastery_hits, &archive_hits);
    let festivals = festival_hits(catalog, &matched, &needle, keep_all);

    tracing::debug!(
        "Search {:?}: {} monasteries, {} archives, {} festivals",
        needle,
        monastery_hits.len(),
        archive_hits.len(),
        festivals.len()
    );

    SearchResult {
        query: query.to_string(),
        categories: SearchCategories {
            monasteries: monastery_hits.into_iter().map(|hit| hit.item).collect(),
            festivals,
            archives: archive_hits.into_iter().map(|hit| hit.item).collect(),
        },
        recommendations: recommend(catalog, visited),
    }
}

/// Splits a comma-separated `visited` parameter into a set of ids, dropping empty segments.
pub fn parse_visited(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

/// History and significance are deliberately not scored.
fn monastery_score(monastery: &MonasteryRecord, needle: &str) -> u32 {
    let fields = [
        monastery.name.as_str(),
        monastery.location.as_str(),
        monastery.description.as_str(),
    ];
    best_score(
        fields
            .into_iter()
            .chain(monastery.tags.iter().map(String::as_str)),
        needle,
    )
}

fn archive_score(archive: &ArchiveRecord, needle: &str) -> u32 {
    best_score(
        [
            archive.title.as_str(),
            archive.monastery_name.as_str(),
            archive.description.as_str(),
            archive.century.as_str(),
            archive.archive_type.as_str(),
        ],
        needle,
    )
}

/// Filters out zero scores (unless `keep_all`), sorts by descending score and truncates.
///
/// `sort_by` is stable, so equal scores keep catalog order.
fn rank<'a, T>(
    mut hits: Vec<ScoredHit<'a, T>>,
    keep_all: bool,
    limit: Option<usize>,
) -> Vec<ScoredHit<'a, T>> {
    hits.retain(|hit| keep_all || hit.score > 0);
    hits.sort_by(|a, b| b.score.cmp(&a.score));
    if let Some(limit) = limit {
        hits.truncate(limit);
    }
    hits
}

/// Ids of monasteries hit directly, then those referenced by archive hits, in first-seen order.
fn matched_monasteries<'a>(
    catalog: &'a Catalog,
    monastery_hits: &[ScoredHit<'a, MonasteryRecord>],
    archive_hits: &[ScoredHit<'a, ArchiveRecord>],
) -> Vec<&'a MonasteryRecord> {
    let mut seen = HashSet::new();
    let mut matched = Vec::new();

    let linked = archive_hits
        .iter()
        .filter_map(|hit| catalog.monastery_by_name(&hit.item.monastery_name));

    for monastery in monastery_hits.iter().map(|hit| hit.item).chain(linked) {
        if seen.insert(monastery.id.as_str()) {
            matched.push(monastery);
        }
    }

    matched
}

fn festival_hits<'a>(
    catalog: &'a Catalog,
    matched: &[&'a MonasteryRecord],
    needle: &str,
    keep_all: bool,
) -> Vec<FestivalHit<'a>> {
    let mut text_matched: Vec<FestivalHit<'a>> = catalog
        .monasteries()
        .iter()
        .flat_map(move |m| {
            m.festivals.iter().map(move |f| FestivalHit {
                kind: HitKind::Festival,
                monastery_id: &m.id,
                monastery_name: &m.name,
                score: best_score([f.name.as_str(), f.description.as_str()], needle),
                item: f,
            })
        })
        .filter(|hit| keep_all || hit.score > 0)
        .collect();
    text_matched.sort_by(|a, b| b.score.cmp(&a.score));

    let related = matched.iter().copied().flat_map(|m| {
        m.festivals.iter().map(move |f| FestivalHit {
            kind: HitKind::Festival,
            monastery_id: &m.id,
            monastery_name: &m.name,
            score: SCORE_RELATED_FESTIVAL,
            item: f,
        })
    });

    // Related hits go first so their forced score survives the dedupe.
    let mut seen = HashSet::new();
    let mut merged: Vec<FestivalHit<'a>> = related
        .chain(text_matched)
        .filter(|hit| seen.insert(hit.dedupe_key()))
        .collect();
    merged.sort_by(|a, b| b.score.cmp(&a.score));
    merged
}
