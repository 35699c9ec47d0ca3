//! Core data model definitions shared across animedex crates.
#![allow(missing_docs)]

pub mod anime;
pub mod decode;
pub mod episode;
pub mod release_year;
pub mod views;

// Intentionally curated re-exports for downstream consumers.
pub use anime::Anime;
pub use episode::Episode;
pub use release_year::ReleaseYear;
pub use views::{
    AnimeCard, AnimeSummary, EpisodeView, HomeResponse, Listing, MessageBody,
    QualityView, SlideCard,
};
