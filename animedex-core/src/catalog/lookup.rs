use serde_json::Value;

use super::Catalog;
use crate::model::{EpisodeView, QualityView};

/// Parse an identifier taken from a request path.
///
/// Reads like a base-10 `parseInt`: leading whitespace and an optional sign,
/// then as many digits as follow. Trailing text is ignored, so `12abc` is 12
/// and `101.0` is 101. No leading digits (or an out-of-range value) yields
/// `None`, which callers surface as "not found".
pub fn parse_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let digits = unsigned.len()
        - unsigned
            .trim_start_matches(|c: char| c.is_ascii_digit())
            .len();
    if digits == 0 {
        return None;
    }
    let sign = trimmed.len() - unsigned.len();
    trimmed[..sign + digits].parse().ok()
}

impl Catalog {
    /// Full dataset record for `id`, exactly as it appeared in the file.
    pub fn anime_record(&self, id: i64) -> Option<&Value> {
        self.anime(id).map(|entry| &entry.raw)
    }

    pub fn episode_view(&self, episode_id: i64) -> Option<EpisodeView> {
        self.episode(episode_id)
            .map(|(owner, episode)| EpisodeView::new(&owner.raw, episode))
    }

    pub fn quality(&self, episode_id: i64) -> Option<QualityView> {
        self.episode(episode_id)
            .map(|(_, episode)| QualityView::new(episode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogSource;
    use serde_json::json;

    fn demo() -> Catalog {
        Catalog::from_values(
            CatalogSource::Memory,
            vec![
                json!({ "ID": 1, "name": "Demo", "episodes": [
                    { "id": 101, "name": "Ep1", "stream": { "Embed": ["url1"] } },
                    { "id": 102, "name": "Ep2", "video": [{ "q": "720p" }, { "q": "1080p" }] }
                ]}),
                json!({ "ID": 2, "name": "Other", "episodes": [{ "id": 201 }] }),
            ],
        )
    }

    #[test]
    fn parse_id_reads_leading_digits() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id(" 7 "), Some(7));
        assert_eq!(parse_id("-3"), Some(-3));
        assert_eq!(parse_id("+8"), Some(8));
        assert_eq!(parse_id("12abc"), Some(12));
        assert_eq!(parse_id("101.0"), Some(101));
        assert_eq!(parse_id("1.5"), Some(1));
        assert_eq!(parse_id("007"), Some(7));
    }

    #[test]
    fn parse_id_rejects_text_without_leading_digits() {
        for raw in ["abc", "", " ", "-", "+-1", "ep1", ".5", "99999999999999999999"] {
            assert_eq!(parse_id(raw), None, "{raw:?}");
        }
    }

    #[test]
    fn episode_view_flattens_parent() {
        let view = demo().episode_view(101).unwrap();
        assert_eq!(view.anime_id, Some(json!(1)));
        assert_eq!(view.anime_name, Some(json!("Demo")));
        assert_eq!(view.stream, json!(["url1"]));
    }

    #[test]
    fn episode_without_streams_has_empty_list() {
        let view = demo().episode_view(201).unwrap();
        assert_eq!(view.anime_id, Some(json!(2)));
        assert_eq!(view.stream, json!([]));
    }

    #[test]
    fn quality_counts_variants() {
        let catalog = demo();
        let quality = catalog.quality(102).unwrap();
        assert_eq!(quality.total, 2);
        assert_eq!(catalog.quality(101).unwrap().total, 0);
        assert!(catalog.quality(999).is_none());
    }

    #[test]
    fn anime_record_is_verbatim() {
        let catalog = demo();
        let record = catalog.anime_record(2).unwrap();
        assert_eq!(record, &json!({ "ID": 2, "name": "Other", "episodes": [{ "id": 201 }] }));
        assert!(catalog.anime_record(3).is_none());
    }
}
