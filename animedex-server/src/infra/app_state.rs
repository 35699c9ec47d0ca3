use std::{fmt, sync::Arc};

use animedex_core::Catalog;

use super::config::Config;

/// Shared, read-only state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
    config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("catalog_source", self.catalog.source())
            .field("catalog_len", &self.catalog.len())
            .field("config", &self.config)
            .finish()
    }
}

impl AppState {
    pub fn new(catalog: Catalog, config: Config) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
