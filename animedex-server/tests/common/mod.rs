//! Shared harness for server integration tests.
#![allow(dead_code)]

use std::fs;

use anyhow::{Result, anyhow};
use animedex_core::{Catalog, CatalogSource};
use animedex_server::{AppState, create_app, infra::config::Config};
use axum_test::TestServer;
use serde_json::{Value, json};
use tempfile::TempDir;

pub const DEMO_IMAGE: &[u8] = b"demo-image-bytes";
pub const INDEX_HTML: &str = "<!doctype html><title>animedex</title>";

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
            "studio": "Toei",
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

/// A running test server plus the directory holding its static assets.
pub struct TestApp {
    pub server: TestServer,
    pub root: TempDir,
}

pub fn build_test_app() -> Result<TestApp> {
    build_test_app_with(fixture_records(), |_| {})
}

pub fn build_test_app_with(
    records: Vec<Value>,
    configure: impl FnOnce(&mut Config),
) -> Result<TestApp> {
    let root = tempfile::tempdir()?;
    seed_assets(&root)?;

    let mut config = Config::from_root(root.path());
    configure(&mut config);

    let catalog = Catalog::from_values(CatalogSource::Memory, records);
    let app = create_app(AppState::new(catalog, config));

    let server = TestServer::builder()
        .build(app)
        .map_err(|err| anyhow!(err.to_string()))?;

    Ok(TestApp { server, root })
}

fn seed_assets(root: &TempDir) -> Result<()> {
    let public = root.path().join("public");
    let images = root.path().join("images");
    fs::create_dir_all(&public)?;
    fs::create_dir_all(&images)?;
    fs::write(public.join("index.html"), INDEX_HTML)?;
    fs::write(images.join("demo.jpg"), DEMO_IMAGE)?;
    Ok(())
}
