use std::{fs, io, path::Path};

use serde_json::Value;
use tracing::{info, warn};

use super::{Catalog, CatalogSource};
use crate::error::{CatalogError, Result};

/// Load the dataset at `path` into a catalog snapshot.
///
/// A missing file yields an empty catalog. An unreadable or malformed file is
/// an error; the caller is expected to treat it as fatal.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "catalog file not found; serving an empty catalog");
            return Ok(Catalog::empty(CatalogSource::Missing(path.to_path_buf())));
        }
        Err(source) => {
            return Err(CatalogError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let values: Vec<Value> =
        serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let catalog = Catalog::from_values(CatalogSource::File(path.to_path_buf()), values);

    info!(
        path = %path.display(),
        anime = catalog.len(),
        episodes = catalog.episode_count(),
        "catalog loaded"
    );

    Ok(catalog)
}
