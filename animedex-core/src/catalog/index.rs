use std::collections::{HashMap, hash_map::Entry};

use tracing::warn;

use super::CatalogEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct EpisodeSlot {
    pub anime: usize,
    pub episode: usize,
}

/// Identifier lookups built once at load time.
///
/// First occurrence wins, which is exactly what a front-to-back scan of the
/// dataset would return.
#[derive(Debug, Clone, Default)]
pub(super) struct CatalogIndex {
    anime: HashMap<i64, usize>,
    episodes: HashMap<i64, EpisodeSlot>,
}

impl CatalogIndex {
    pub(super) fn build(entries: &[CatalogEntry]) -> Self {
        let mut index = Self::default();

        for (anime_pos, entry) in entries.iter().enumerate() {
            if let Some(id) = entry.anime.id {
                match index.anime.entry(id) {
                    Entry::Vacant(slot) => {
                        slot.insert(anime_pos);
                    }
                    Entry::Occupied(first) => {
                        warn!(
                            anime.id = id,
                            first = *first.get(),
                            duplicate = anime_pos,
                            "duplicate anime id in catalog; keeping first"
                        );
                    }
                }
            }

            for (episode_pos, episode) in entry.anime.episodes().iter().enumerate()
            {
                let Some(episode_id) = episode.id else {
                    continue;
                };
                match index.episodes.entry(episode_id) {
                    Entry::Vacant(slot) => {
                        slot.insert(EpisodeSlot {
                            anime: anime_pos,
                            episode: episode_pos,
                        });
                    }
                    Entry::Occupied(first) => {
                        warn!(
                            episode.id = episode_id,
                            owner = first.get().anime,
                            duplicate_owner = anime_pos,
                            "duplicate episode id in catalog; keeping first"
                        );
                    }
                }
            }
        }

        index
    }

    pub(super) fn anime_position(&self, id: i64) -> Option<usize> {
        self.anime.get(&id).copied()
    }

    pub(super) fn episode_slot(&self, episode_id: i64) -> Option<EpisodeSlot> {
        self.episodes.get(&episode_id).copied()
    }
}
