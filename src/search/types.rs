use crate::catalog::types::{ArchiveRecord, FestivalRecord, MonasteryRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HitKind {
    Monastery,
    Archive,
    Festival,
}

/// A catalog record paired with its relevance for one request.
#[derive(Debug, Clone, Copy)]
pub struct ScoredHit<'a, T> {
    pub kind: HitKind,
    pub score: u32,
    pub item: &'a T,
}

/// A festival hit, tagged with the monastery that celebrates it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FestivalHit<'a> {
    pub kind: HitKind,
    pub monastery_id: &'a str,
    pub monastery_name: &'a str,
    pub score: u32,
    pub item: &'a FestivalRecord,
}

impl<'a> FestivalHit<'a> {
    /// Identity of a festival across the related and text-matched sets.
    pub fn dedupe_key(&self) -> (&'a str, &'a str) {
        (self.monastery_id, self.item.name.as_str())
    }
}

#[derive(Debug, Serialize)]
pub struct SearchCategories<'a> {
    pub monasteries: Vec<&'a MonasteryRecord>,
    pub festivals: Vec<FestivalHit<'a>>,
    pub archives: Vec<&'a ArchiveRecord>,
}

/// Response body of `/api/search`. Borrows from the catalog it was computed over.
#[derive(Debug, Serialize)]
pub struct SearchResult<'a> {
    pub query: String,
    pub categories: SearchCategories<'a>,
    pub recommendations: Vec<&'a MonasteryRecord>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub visited: Option<String>,
}
