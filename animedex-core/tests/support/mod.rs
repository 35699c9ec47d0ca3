//! Shared fixtures for core integration tests.
#![allow(dead_code)]

use animedex_core::{Catalog, CatalogSource};
use serde_json::{Value, json};

/// Small dataset covering every field the engine inspects, plus a few
/// deliberately incomplete records.
pub fn fixture_records() -> Vec<Value> {
    vec![
        json!({
            "ID": 1,
            "name": "Demo",
            "tag": ["popular"],
            "Genres": ["Action"],
            "status": "Ongoing",
            "Release_year": 2020,
            "img": "/images/demo.jpg",
            "SLIDESHOW": true,
            "episodes": [
                { "id": 101, "name": "Ep1", "stream": { "Embed": ["url1"] } }
            ]
        }),
        json!({
            "ID": 2,
            "name": "One Piece",
            "othername": ["Wan Pisu"],
            "tag": ["popular", "New release"],
            "Genres": ["Adventure", "Comedy"],
            "status": "Ongoing",
            "Release_year": "1999",
            "img": "/images/op.jpg",
            "SLIDESHOW": "true",
            "episodes": [
                {
                    "id": 201,
                    "name": "Romance Dawn",
                    "poster": "/images/op-1.jpg",
                    "stream": { "Embed": ["op-a", "op-b"] },
                    "video": [{ "quality": "720p" }, { "quality": "1080p" }]
                },
                { "id": 202, "name": "Enter Zoro" }
            ]
        }),
        json!({
            "ID": 3,
            "name": "Piece of Cake",
            "tag": ["new release"],
            "Genres": ["Slice of Life"],
            "status": "Completed",
            "Release_year": 2015
        }),
        json!({
            "ID": 4,
            "name": "Nameless Draft"
        }),
        json!({
            "ID": 5,
            "name": "Attack on Titan",
            "othername": ["Shingeki no Kyojin"],
            "tag": ["New release"],
            "Genres": ["action", "Drama"],
            "status": "completed",
            "Release_year": "2013",
            "SLIDESHOW": true,
            "episodes": []
        }),
    ]
}

pub fn fixture_catalog() -> Catalog {
    Catalog::from_values(CatalogSource::Memory, fixture_records())
}

/// Integer ids of projected items, in listing order.
pub fn ids<T>(items: &[T], id: impl Fn(&T) -> Option<&Value>) -> Vec<i64> {
    items
        .iter()
        .filter_map(|item| id(item).and_then(Value::as_i64))
        .collect()
}
