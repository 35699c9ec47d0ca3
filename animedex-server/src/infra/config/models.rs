use std::path::{Path, PathBuf};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATASET_FILE: &str = "database.json";
pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const DEFAULT_IMAGES_DIR: &str = "images";

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub assets: AssetsConfig,
    pub cors: CorsConfig,
    pub metadata: ConfigMetadata,
}

impl Config {
    /// Built-in defaults with every relative path anchored at `root`.
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            server: ServerConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
            catalog: CatalogConfig {
                dataset_path: root.join(DEFAULT_DATASET_FILE),
            },
            assets: AssetsConfig {
                public_dir: root.join(DEFAULT_PUBLIC_DIR),
                images_dir: root.join(DEFAULT_IMAGES_DIR),
            },
            cors: CorsConfig::default(),
            metadata: ConfigMetadata {
                root,
                ..ConfigMetadata::default()
            },
        }
    }

    pub fn dataset_path(&self) -> &Path {
        &self.catalog.dataset_path
    }

    pub fn root(&self) -> &Path {
        &self.metadata.root
    }

    /// Anchor a configured path at the deployment root unless it is absolute.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.metadata.root.join(path)
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub dataset_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct AssetsConfig {
    pub public_dir: PathBuf,
    pub images_dir: PathBuf,
}

/// An empty origin list means "allow any origin".
#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn is_wildcard_included(&self) -> bool {
        self.allowed_origins
            .iter()
            .any(|origin| origin.trim() == "*")
    }

    pub fn is_permissive(&self) -> bool {
        self.allowed_origins.is_empty() || self.is_wildcard_included()
    }
}

#[derive(Debug, Clone)]
pub struct ConfigMetadata {
    pub root: PathBuf,
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}

impl Default for ConfigMetadata {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            config_path: None,
            env_file_loaded: false,
        }
    }
}
