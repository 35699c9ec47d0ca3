//! HTTP request handlers organized by functionality

pub mod catalog;
pub mod health;

pub use catalog::{
    get_anime_handler, get_episode_handler, get_home_handler, get_quality_handler,
    get_slideshow_handler, query_catalog_handler,
};
pub use health::{health_handler, ping_handler};
