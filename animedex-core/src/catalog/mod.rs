//! Immutable in-memory catalog snapshot.
//!
//! The dataset is parsed once into [`CatalogEntry`] values. Each entry keeps the
//! typed [`Anime`] used by predicates and the raw JSON object returned verbatim
//! by the detail lookup. Dataset order is preserved and never changes.

mod index;
mod loader;
mod lookup;

use std::{fmt, path::PathBuf};

use serde_json::Value;
use tracing::warn;

use crate::model::Anime;
use index::CatalogIndex;

pub use loader::load_catalog;
pub use lookup::parse_id;

/// Where a catalog snapshot came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Parsed from a dataset file.
    File(PathBuf),
    /// The dataset file did not exist; the catalog is empty.
    Missing(PathBuf),
    /// Built in memory, e.g. from test fixtures.
    Memory,
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Missing(path) => {
                write!(f, "{} (missing)", path.display())
            }
            CatalogSource::Memory => write!(f, "in-memory"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub anime: Anime,
    pub raw: Value,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: CatalogIndex,
    source: CatalogSource,
}

impl Catalog {
    pub fn empty(source: CatalogSource) -> Self {
        Self {
            entries: Vec::new(),
            index: CatalogIndex::default(),
            source,
        }
    }

    /// Build a snapshot from raw dataset records, in dataset order.
    ///
    /// Records are never rejected. A field of the wrong JSON type is left out
    /// of the typed view (so predicates do not match on it) and logged; the
    /// raw record is kept unchanged.
    pub fn from_values(source: CatalogSource, values: Vec<Value>) -> Self {
        let entries: Vec<CatalogEntry> = values
            .into_iter()
            .enumerate()
            .map(|(position, raw)| {
                if !raw.is_object() {
                    warn!(%source, record = position, "catalog record is not an object");
                }
                let anime = Anime::from_value(&raw);
                for field in anime.coerced_fields(&raw) {
                    warn!(
                        %source,
                        record = position,
                        field,
                        "catalog field has an unexpected type; ignoring it for lookups"
                    );
                }
                CatalogEntry { anime, raw }
            })
            .collect();

        let index = CatalogIndex::build(&entries);

        Self {
            entries,
            index,
            source,
        }
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn episode_count(&self) -> usize {
        self.iter().map(|anime| anime.episodes().len()).sum()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Titles in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &Anime> + '_ {
        self.entries.iter().map(|entry| &entry.anime)
    }

    /// First title whose `ID` equals `id`.
    pub fn anime(&self, id: i64) -> Option<&CatalogEntry> {
        self.index
            .anime_position(id)
            .and_then(|position| self.entries.get(position))
    }

    /// First episode in dataset order carrying `episode_id`: the owning entry
    /// and the raw episode object.
    pub fn episode(&self, episode_id: i64) -> Option<(&CatalogEntry, &Value)> {
        let slot = self.index.episode_slot(episode_id)?;
        let owner = self.entries.get(slot.anime)?;
        let episode = owner.raw.get("episodes")?.get(slot.episode)?;
        Some((owner, episode))
    }
}
