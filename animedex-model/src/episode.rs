use serde::Deserialize;
use serde_json::Value;

use crate::decode;

/// Typed view of an episode sub-record: only what the catalog indexes.
///
/// Everything else (`poster`, `stream`, `video`) is opaque to the service and
/// read from the raw record when a response is shaped.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Episode {
    #[serde(default, deserialize_with = "decode::id")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "decode::string")]
    pub name: Option<String>,
}

impl Episode {
    /// Lenient decode; anything that is not a JSON object becomes an empty
    /// episode that no identifier resolves to.
    pub fn from_value(value: &Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        Self::deserialize(value).unwrap_or_default()
    }
}

/// `stream.Embed` of a raw episode, or an empty list when it is falsy.
pub fn embeds(episode: &Value) -> Value {
    episode
        .get("stream")
        .and_then(|stream| stream.get("Embed"))
        .filter(|embed| decode::is_truthy(embed))
        .cloned()
        .unwrap_or_else(|| Value::Array(Vec::new()))
}
