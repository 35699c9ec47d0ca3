use crate::{
    catalog::Catalog,
    model::{AnimeCard, AnimeSummary, HomeResponse, Listing, SlideCard},
};

use super::{filtering::CatalogFilter, types::CatalogQuery};

pub const POPULAR_TAG: &str = "popular";
pub const NEW_RELEASE_TAG: &str = "New release";

impl Catalog {
    /// Titles matching every supplied dimension of `query`, in dataset order.
    pub fn query(&self, query: &CatalogQuery) -> Listing<AnimeSummary> {
        let filter = CatalogFilter::new(query);
        self.entries()
            .iter()
            .filter(|entry| filter.matches(&entry.anime))
            .map(|entry| AnimeSummary::from_record(&entry.raw))
            .collect()
    }

    /// Home buckets. Tag membership here is case-sensitive, unlike `/query`.
    pub fn home(&self) -> HomeResponse {
        HomeResponse {
            popular: self.tagged(POPULAR_TAG),
            new_release: self.tagged(NEW_RELEASE_TAG),
        }
    }

    pub fn slideshow(&self) -> Listing<SlideCard> {
        self.entries()
            .iter()
            .filter(|entry| entry.anime.is_slideshow())
            .map(|entry| SlideCard::from_record(&entry.raw))
            .collect()
    }

    fn tagged(&self, tag: &str) -> Listing<AnimeCard> {
        self.entries()
            .iter()
            .filter(|entry| entry.anime.has_tag(tag))
            .map(|entry| AnimeCard::from_record(&entry.raw))
            .collect()
    }
}
