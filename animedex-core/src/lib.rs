//! # animedex core
//!
//! Read-only catalog logic behind the animedex HTTP service.
//!
//! - [`catalog`]: loads the JSON dataset once into an immutable [`Catalog`]
//!   snapshot and resolves titles and episodes by identifier.
//! - [`query`]: the filter engine behind `/query`, plus the curated home,
//!   slideshow and episode views.
//! - [`api`]: route paths shared by the server and its tests.
//!
//! The snapshot is plain data. Callers wrap it in an `Arc` and share it
//! across request handlers without locking.
#![allow(missing_docs)]

pub mod api;
pub mod catalog;
pub mod error;
pub mod query;

pub use animedex_model as model;
pub use catalog::{Catalog, CatalogEntry, CatalogSource, load_catalog, parse_id};
pub use error::{CatalogError, Result};
pub use query::{CatalogFilter, CatalogQuery, NameTerms};
