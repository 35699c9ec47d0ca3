//! Route templates use axum's `{param}` capture syntax.

pub const HOME: &str = "/home";
pub const QUERY: &str = "/query";
pub const ANIME: &str = "/id/{id}";
pub const EPISODE: &str = "/episode/{episode_id}";
pub const QUALITY: &str = "/quality/{episode_id}";
pub const SLIDESHOW: &str = "/slideshow";

pub const PING: &str = "/ping";
pub const HEALTH: &str = "/health";

/// Prefix mapped onto the image asset directory.
pub const IMAGES: &str = "/images";

pub mod utils {
    use super::{ANIME, EPISODE, QUALITY};

    /// Replace a single path parameter (e.g. `"{id}"`) with the provided value.
    pub fn replace_param(
        route: &str,
        param: &str,
        value: impl AsRef<str>,
    ) -> String {
        route.replace(param, value.as_ref())
    }

    pub fn anime_path(id: impl ToString) -> String {
        replace_param(ANIME, "{id}", id.to_string())
    }

    pub fn episode_path(episode_id: impl ToString) -> String {
        replace_param(EPISODE, "{episode_id}", episode_id.to_string())
    }

    pub fn quality_path(episode_id: impl ToString) -> String {
        replace_param(QUALITY, "{episode_id}", episode_id.to_string())
    }

}
