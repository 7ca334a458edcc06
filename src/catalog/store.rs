use super::types::{ArchiveRecord, Dataset, MonasteryRecord};

use anyhow::{Result, bail};
use std::collections::{HashMap, HashSet};

/// Immutable in-memory catalog shared by every request.
///
/// Built once at startup; handlers only ever read it through `Arc<Catalog>`.
/// Both lookup indexes are computed over the full monastery collection.
pub struct Catalog {
    monasteries: Vec<MonasteryRecord>,
    archives: Vec<ArchiveRecord>,
    by_id: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(dataset: Dataset) -> Result<Self> {
        let Dataset {
            mut monasteries,
            archives,
        } = dataset;

        let mut by_id = HashMap::with_capacity(monasteries.len());
        let mut by_name = HashMap::with_capacity(monasteries.len());

        for (idx, monastery) in monasteries.iter_mut().enumerate() {
            if monastery.id.trim().is_empty() {
                bail!("Monastery {:?} has an empty id", monastery.name);
            }
            if by_id.insert(monastery.id.clone(), idx).is_some() {
                bail!("Duplicate monastery id {:?}", monastery.id);
            }

            dedupe_tags(monastery);

            // Later records with the same name shadow earlier ones.
            by_name.insert(monastery.name.to_lowercase(), idx);
        }

        Ok(Self {
            monasteries,
            archives,
            by_id,
            by_name,
        })
    }

    pub fn monasteries(&self) -> &[MonasteryRecord] {
        &self.monasteries
    }

    pub fn archives(&self) -> &[ArchiveRecord] {
        &self.archives
    }

    pub fn monastery(&self, id: &str) -> Option<&MonasteryRecord> {
        self.by_id.get(id).map(|&idx| &self.monasteries[idx])
    }

    /// Case-insensitive lookup used to resolve `ArchiveRecord::monastery_name`.
    pub fn monastery_by_name(&self, name: &str) -> Option<&MonasteryRecord> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&idx| &self.monasteries[idx])
    }

    pub fn is_empty(&self) -> bool {
        self.monasteries.is_empty() && self.archives.is_empty()
    }
}

fn dedupe_tags(monastery: &mut MonasteryRecord) {
    let before = monastery.tags.len();
    let mut seen = HashSet::with_capacity(before);
    monastery.tags.retain(|tag| seen.insert(tag.clone()));

    if monastery.tags.len() != before {
        tracing::warn!(
            "Monastery {} had {} duplicate tag(s), collapsed",
            monastery.id,
            before - monastery.tags.len()
        );
    }
}
