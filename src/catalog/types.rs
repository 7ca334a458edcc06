use serde::{Deserialize, Serialize};

/// A festival celebrated at a monastery.
///
/// Festivals do not know their owner; search hits carry the monastery id and name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FestivalRecord {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A monastery with its descriptive text, tags and festivals.
///
/// `tags` behaves as a set: duplicates are collapsed when the catalog is built,
/// keeping first-seen order so responses stay deterministic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonasteryRecord {
    pub id: String,
    pub name: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub history: String,
    #[serde(default)]
    pub significance: String,
    pub district: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub festivals: Vec<FestivalRecord>,
}

/// A digitized archive item (manuscript, mural, thangka...).
///
/// `monastery_name` is a denormalized link, resolved by case-insensitive name lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveRecord {
    pub title: String,
    pub monastery_name: String,
    pub description: String,
    pub century: String,
    #[serde(rename = "type")]
    pub archive_type: String,
}

/// On-disk / over-the-wire shape of a catalog dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub monasteries: Vec<MonasteryRecord>,
    #[serde(default)]
    pub archives: Vec<ArchiveRecord>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub monasteries: usize,
    pub archives: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
