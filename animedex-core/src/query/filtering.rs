//! Predicates evaluated against a single [`Anime`].
//!
//! Each dimension of a [`CatalogQuery`] is normalized once into a
//! [`CatalogFilter`], then checked per record. A record missing the field a
//! predicate looks at never matches that predicate.

use crate::model::Anime;

use super::types::{CatalogQuery, present};

/// The encoded-space sequence some clients leave in search text.
const ENCODED_SPACE: &str = "%20";

/// Lower-cased search terms split out of a free-text name query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTerms(Vec<String>);

impl NameTerms {
    /// Split on whitespace, `&`, `-`, `_` and `%20`; empty terms are dropped.
    pub fn parse(raw: &str) -> Self {
        let lowered = raw.to_lowercase().replace(ENCODED_SPACE, " ");
        let terms = lowered
            .split(|c: char| c.is_whitespace() || matches!(c, '&' | '-' | '_'))
            .filter(|term| !term.is_empty())
            .map(str::to_owned)
            .collect();
        Self(terms)
    }

    pub fn terms(&self) -> &[String] {
        &self.0
    }

    /// Every term must appear in the primary name or in one alternate name.
    pub fn matches(&self, anime: &Anime) -> bool {
        let name = anime.name.as_deref().map(str::to_lowercase);
        let other_names: Vec<String> = anime
            .other_names()
            .iter()
            .map(|alt| alt.to_lowercase())
            .collect();

        self.0.iter().all(|term| {
            name.as_deref().is_some_and(|n| n.contains(term.as_str()))
                || other_names.iter().any(|alt| alt.contains(term.as_str()))
        })
    }
}

/// A [`CatalogQuery`] with every dimension normalized for matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    name: Option<NameTerms>,
    status: Option<String>,
    year: Option<String>,
    genre: Option<String>,
    tag: Option<String>,
}

impl CatalogFilter {
    pub fn new(query: &CatalogQuery) -> Self {
        Self {
            name: present(&query.name).map(NameTerms::parse),
            status: present(&query.status).map(str::to_lowercase),
            year: present(&query.year).map(str::to_owned),
            genre: present(&query.genre).map(str::to_lowercase),
            tag: present(&query.tag).map(str::to_lowercase),
        }
    }

    pub fn matches(&self, anime: &Anime) -> bool {
        self.name.as_ref().is_none_or(|terms| terms.matches(anime))
            && self
                .status
                .as_deref()
                .is_none_or(|status| matches_status(anime, status))
            && self
                .year
                .as_deref()
                .is_none_or(|year| matches_year(anime, year))
            && self
                .genre
                .as_deref()
                .is_none_or(|genre| matches_genre(anime, genre))
            && self.tag.as_deref().is_none_or(|tag| matches_tag(anime, tag))
    }
}

impl From<&CatalogQuery> for CatalogFilter {
    fn from(query: &CatalogQuery) -> Self {
        Self::new(query)
    }
}

/// `status` must already be lower-cased.
pub fn matches_status(anime: &Anime, status: &str) -> bool {
    anime
        .status
        .as_deref()
        .is_some_and(|s| s.to_lowercase() == status)
}

pub fn matches_year(anime: &Anime, year: &str) -> bool {
    anime
        .release_year
        .as_ref()
        .is_some_and(|release| release.matches(year))
}

/// `genre` must already be lower-cased.
pub fn matches_genre(anime: &Anime, genre: &str) -> bool {
    contains_folded(anime.genres.as_deref(), genre)
}

/// `tag` must already be lower-cased.
pub fn matches_tag(anime: &Anime, tag: &str) -> bool {
    contains_folded(anime.tags.as_deref(), tag)
}

fn contains_folded(values: Option<&[String]>, wanted: &str) -> bool {
    values.is_some_and(|values| values.iter().any(|v| v.to_lowercase() == wanted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ReleaseYear;

    fn anime(name: &str, other_names: &[&str]) -> Anime {
        Anime {
            id: Some(1),
            name: Some(name.into()),
            other_names: Some(other_names.iter().map(|s| s.to_string()).collect()),
            ..Default::default()
        }
    }

    #[test]
    fn name_terms_split_on_every_separator() {
        for raw in ["one-piece", "one_piece", "one piece", "one%20piece", "One & Piece"] {
            assert_eq!(
                NameTerms::parse(raw).terms(),
                ["one".to_string(), "piece".to_string()],
                "query {raw:?}"
            );
        }
    }

    #[test]
    fn name_terms_drop_empty_fragments() {
        assert_eq!(NameTerms::parse("  --one__ ").terms(), ["one".to_string()]);
        assert!(NameTerms::parse("-&_").terms().is_empty());
    }

    #[test]
    fn digits_are_not_separators() {
        assert_eq!(NameTerms::parse("mob psycho 100").terms().len(), 3);
        assert_eq!(NameTerms::parse("2020").terms(), ["2020".to_string()]);
    }

    #[test]
    fn each_term_may_match_a_different_name_field() {
        let record = anime("Shingeki no Kyojin", &["Attack on Titan"]);
        assert!(NameTerms::parse("kyojin").matches(&record));
        assert!(NameTerms::parse("TITAN").matches(&record));
        assert!(NameTerms::parse("shingeki titan").matches(&record));
        assert!(!NameTerms::parse("titan slayer").matches(&record));
    }

    #[test]
    fn name_query_without_names_never_matches() {
        let record = Anime::default();
        assert!(!NameTerms::parse("demo").matches(&record));
    }

    #[test]
    fn genre_and_tag_are_case_insensitive_exact() {
        let record = Anime {
            genres: Some(vec!["Slice of Life".into()]),
            tags: Some(vec!["New release".into()]),
            ..Default::default()
        };
        assert!(matches_genre(&record, "slice of life"));
        assert!(!matches_genre(&record, "slice"));
        assert!(matches_tag(&record, "new release"));
        assert!(!matches_tag(&Anime::default(), "new release"));
    }

    #[test]
    fn filter_combines_dimensions_with_and() {
        let record = Anime {
            name: Some("Demo".into()),
            status: Some("Ongoing".into()),
            release_year: Some(ReleaseYear::from(2020)),
            genres: Some(vec!["Action".into()]),
            ..Default::default()
        };

        let both = CatalogFilter::new(&CatalogQuery {
            status: Some("ONGOING".into()),
            genre: Some("action".into()),
            ..Default::default()
        });
        assert!(both.matches(&record));

        let conflicting = CatalogFilter::new(&CatalogQuery {
            status: Some("ongoing".into()),
            year: Some("2019".into()),
            ..Default::default()
        });
        assert!(!conflicting.matches(&record));
    }

    #[test]
    fn empty_parameters_impose_no_constraint() {
        let query = CatalogQuery {
            name: Some(String::new()),
            status: Some(String::new()),
            ..Default::default()
        };
        assert!(CatalogFilter::new(&query).matches(&Anime::default()));
    }

    #[test]
    fn missing_status_never_matches() {
        assert!(!matches_status(&Anime::default(), "ongoing"));
        assert!(!matches_year(&Anime::default(), "2020"));
    }
}
