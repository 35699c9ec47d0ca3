pub mod handle_anime;
pub mod handle_episode;
pub mod handle_listing;

pub use handle_anime::get_anime_handler;
pub use handle_episode::{get_episode_handler, get_quality_handler};
pub use handle_listing::{get_home_handler, get_slideshow_handler, query_catalog_handler};
