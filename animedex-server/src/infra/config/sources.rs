use serde::Deserialize;
use std::path::PathBuf;

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct FileConfig {
    pub root: Option<PathBuf>,
    #[serde(default)]
    pub server: FileServerConfig,
    #[serde(default)]
    pub catalog: FileCatalogConfig,
    #[serde(default)]
    pub assets: FileAssetsConfig,
    #[serde(default)]
    pub cors: FileCorsConfig,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct FileServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct FileCatalogConfig {
    pub dataset: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct FileAssetsConfig {
    pub public_dir: Option<PathBuf>,
    pub images_dir: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct FileCorsConfig {
    pub allowed_origins: Option<Vec<String>>,
}

/// Environment-derived configuration values.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub root: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    /// `PORT` as given, kept so an unparsable value can be reported.
    pub port_raw: Option<String>,
    pub dataset_path: Option<PathBuf>,
    pub public_dir: Option<PathBuf>,
    pub images_dir: Option<PathBuf>,
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let port_raw = var("PORT");

        Self {
            config_path: var("ANIMEDEX_CONFIG").map(PathBuf::from),
            root: var("ANIMEDEX_ROOT").map(PathBuf::from),
            host: var("HOST"),
            port: port_raw.as_deref().and_then(|raw| raw.trim().parse().ok()),
            port_raw,
            dataset_path: var("DATASET_PATH").map(PathBuf::from),
            public_dir: var("PUBLIC_DIR").map(PathBuf::from),
            images_dir: var("IMAGES_DIR").map(PathBuf::from),
            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS").map(|raw| parse_csv(&raw)),
        }
    }
}

fn parse_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(|part| {
            let trimmed = part.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}
