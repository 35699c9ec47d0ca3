//! Response shapes served by the HTTP layer.
//!
//! Key names follow the wire format existing clients already consume, which is
//! why the casing is inconsistent (`Total` vs `total`, `ID` vs `id`).
//!
//! Projections copy values out of the raw record unchanged. A key missing from
//! the record is left out of the response; a key holding `null` is sent as
//! `null`.

use serde::Serialize;
use serde_json::Value;

use crate::{decode, episode};

/// Counted list envelope: `{"Total": n, "items": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing<T> {
    #[serde(rename = "Total")]
    pub total: usize,
    pub items: Vec<T>,
}

impl<T> From<Vec<T>> for Listing<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}

impl<T> FromIterator<T> for Listing<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

fn field(record: &Value, key: &str) -> Option<Value> {
    record.get(key).cloned()
}

/// Minimal projection used by the home buckets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimeCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img: Option<Value>,
}

impl AnimeCard {
    pub fn from_record(record: &Value) -> Self {
        Self {
            id: field(record, "ID"),
            name: field(record, "name"),
            img: field(record, "img"),
        }
    }
}

/// Slideshow projection. Same fields as [`AnimeCard`] but the identifier is
/// keyed `ID`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlideCard {
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img: Option<Value>,
}

impl SlideCard {
    pub fn from_record(record: &Value) -> Self {
        Self {
            id: field(record, "ID"),
            name: field(record, "name"),
            img: field(record, "img"),
        }
    }
}

/// Query result projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimeSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Value>,
}

impl AnimeSummary {
    pub fn from_record(record: &Value) -> Self {
        Self {
            id: field(record, "ID"),
            name: field(record, "name"),
            img: field(record, "img"),
            status: field(record, "status"),
            year: field(record, "Release_year"),
            genres: field(record, "Genres"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeResponse {
    #[serde(rename = "Popular")]
    pub popular: Listing<AnimeCard>,
    #[serde(rename = "New release")]
    pub new_release: Listing<AnimeCard>,
}

/// Episode flattened together with its parent title.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anime_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anime_name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<Value>,
    pub stream: Value,
}

impl EpisodeView {
    /// `anime` and `episode` are the raw records, the episode being an
    /// element of the anime's `episodes` array.
    pub fn new(anime: &Value, episode: &Value) -> Self {
        Self {
            anime_id: field(anime, "ID"),
            anime_name: field(anime, "name"),
            id: field(episode, "id"),
            name: field(episode, "name"),
            poster: field(episode, "poster"),
            stream: episode::embeds(episode),
        }
    }
}

/// `{"total": n, "videos": [...]}` for one raw episode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityView {
    pub total: usize,
    pub videos: Value,
}

impl QualityView {
    pub fn new(episode: &Value) -> Self {
        match episode.get("video").filter(|video| decode::is_truthy(video)) {
            Some(video) => Self {
                total: match video {
                    Value::Array(items) => items.len(),
                    Value::String(text) => text.encode_utf16().count(),
                    _ => 0,
                },
                videos: video.clone(),
            },
            None => Self {
                total: 0,
                videos: Value::Array(Vec::new()),
            },
        }
    }
}

/// Error envelope used by every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
