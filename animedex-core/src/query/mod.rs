//! Catalog filtering and the list-shaped views built on top of it.

pub mod filtering;
pub mod listing;
pub mod types;

pub use filtering::{CatalogFilter, NameTerms};
pub use listing::{NEW_RELEASE_TAG, POPULAR_TAG};
pub use types::CatalogQuery;
