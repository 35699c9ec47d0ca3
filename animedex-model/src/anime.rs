use serde::Deserialize;
use serde_json::Value;

use crate::{decode, episode::Episode, release_year::ReleaseYear};

/// One catalog title as stored in the dataset document.
///
/// Every field is optional: records in the wild are hand-edited and any key
/// may be missing or hold the wrong JSON type. Decoding never fails; a field
/// that cannot be read is `None` and predicates treat it as "does not match".
/// Response bodies are shaped from the raw record, not from this type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Anime {
    #[serde(rename = "ID", default, deserialize_with = "decode::id")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "decode::string")]
    pub name: Option<String>,
    #[serde(rename = "othername", default, deserialize_with = "decode::string_list")]
    pub other_names: Option<Vec<String>>,
    #[serde(default, deserialize_with = "decode::string")]
    pub status: Option<String>,
    #[serde(rename = "Release_year", default)]
    pub release_year: Option<ReleaseYear>,
    #[serde(rename = "Genres", default, deserialize_with = "decode::string_list")]
    pub genres: Option<Vec<String>>,
    #[serde(rename = "tag", default, deserialize_with = "decode::string_list")]
    pub tags: Option<Vec<String>>,
    /// Kept untyped: only a literal JSON `true` puts a title in the slideshow.
    #[serde(rename = "SLIDESHOW", default)]
    pub slideshow: Option<Value>,
    #[serde(default, deserialize_with = "decode::episodes")]
    pub episodes: Option<Vec<Episode>>,
}

impl Anime {
    /// Lenient decode of one dataset record. Anything that is not a JSON
    /// object yields an empty title.
    pub fn from_value(value: &Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        Self::deserialize(value).unwrap_or_default()
    }

    /// Dataset keys present in `raw` that the typed view could not read in
    /// full: wrong-typed scalars and lists with non-string elements.
    pub fn coerced_fields(&self, raw: &Value) -> Vec<&'static str> {
        let present = |key: &str| raw.get(key).is_some_and(|value| !value.is_null());
        let list_len = |key: &str| raw.get(key).and_then(Value::as_array).map(Vec::len);

        let mut fields = Vec::new();
        if present("ID") && self.id.is_none() {
            fields.push("ID");
        }
        if present("name") && self.name.is_none() {
            fields.push("name");
        }
        if present("status") && self.status.is_none() {
            fields.push("status");
        }
        for (key, list) in [
            ("othername", &self.other_names),
            ("Genres", &self.genres),
            ("tag", &self.tags),
        ] {
            if present(key) && (list.is_none() || list.as_ref().map(Vec::len) != list_len(key)) {
                fields.push(key);
            }
        }
        if present("episodes") && self.episodes.is_none() {
            fields.push("episodes");
        }
        fields
    }

    /// Case-sensitive membership test against the tag list.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .as_deref()
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }

    pub fn is_slideshow(&self) -> bool {
        matches!(self.slideshow, Some(Value::Bool(true)))
    }

    pub fn episodes(&self) -> &[Episode] {
        self.episodes.as_deref().unwrap_or_default()
    }

    pub fn other_names(&self) -> &[String] {
        self.other_names.as_deref().unwrap_or_default()
    }
}
