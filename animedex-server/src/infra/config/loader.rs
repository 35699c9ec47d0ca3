use std::{fs, path::PathBuf};
use thiserror::Error;

use super::{
    models::Config,
    sources::{EnvConfig, FileConfig},
    validation::{self, ConfigWarnings},
};

const DEFAULT_CONFIG_LOCATIONS: [&str; 2] = ["animedex.toml", "config/animedex.toml"];

#[derive(Debug, Default, Clone)]
struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub overrides: ConfigOverrides,
}

/// Command-line values; these win over every other source.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub dataset_path: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        self.options.overrides = overrides;
        self
    }

    /// Load `.env`, then resolve configuration from the process environment.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match dotenvy::dotenv() {
            Ok(_) => true,
            Err(dotenvy::Error::Io(_)) => false,
            Err(err) => return Err(err.into()),
        };

        let mut load = self.load_from_env(EnvConfig::gather())?;
        load.config.metadata.env_file_loaded = env_file_loaded;
        Ok(load)
    }

    /// Resolve configuration from an already gathered environment.
    pub fn load_from_env(&self, env: EnvConfig) -> Result<ConfigLoad, ConfigLoadError> {
        let (file, config_path) = self.load_file_config(&env)?;
        let config = self.compose(file, &env, config_path);
        let warnings = validation::collect_warnings(&config, &env);
        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let explicit = self
            .options
            .config_path
            .clone()
            .or_else(|| env.config_path.clone());

        let path = match explicit {
            Some(path) if !path.exists() => {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            Some(path) => path,
            None => {
                let base = env.root.clone().unwrap_or_else(|| PathBuf::from("."));
                match DEFAULT_CONFIG_LOCATIONS
                    .iter()
                    .map(|candidate| base.join(candidate))
                    .find(|candidate| candidate.exists())
                {
                    Some(path) => path,
                    None => return Ok((None, None)),
                }
            }
        };

        let contents = fs::read_to_string(&path).map_err(|source| ConfigLoadError::Io {
            path: path.clone(),
            source,
        })?;
        let file: FileConfig =
            toml::from_str(&contents).map_err(|source| ConfigLoadError::Parse {
                path: path.clone(),
                source,
            })?;

        Ok((Some(file), Some(path)))
    }

    fn compose(
        &self,
        file: Option<FileConfig>,
        env: &EnvConfig,
        config_path: Option<PathBuf>,
    ) -> Config {
        let file = file.unwrap_or_default();
        let overrides = &self.options.overrides;

        let root = env
            .root
            .clone()
            .or(file.root)
            .unwrap_or_else(|| PathBuf::from("."));
        let mut config = Config::from_root(root);

        if let Some(host) = overrides
            .host
            .clone()
            .or_else(|| env.host.clone())
            .or(file.server.host)
        {
            config.server.host = host;
        }
        if let Some(port) = overrides.port.or(env.port).or(file.server.port) {
            config.server.port = port;
        }

        let dataset = overrides
            .dataset_path
            .clone()
            .or_else(|| env.dataset_path.clone())
            .or(file.catalog.dataset);
        if let Some(path) = dataset {
            config.catalog.dataset_path = config.resolve(path);
        }

        if let Some(path) = env.public_dir.clone().or(file.assets.public_dir) {
            config.assets.public_dir = config.resolve(path);
        }
        if let Some(path) = env.images_dir.clone().or(file.assets.images_dir) {
            config.assets.images_dir = config.resolve(path);
        }

        if let Some(origins) = env
            .cors_allowed_origins
            .clone()
            .or(file.cors.allowed_origins)
        {
            config.cors.allowed_origins = origins;
        }

        config.metadata.config_path = config_path;
        config
    }
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn env_with_root(root: &Path) -> EnvConfig {
        EnvConfig {
            root: Some(root.to_path_buf()),
            ..EnvConfig::default()
        }
    }

    #[test]
    fn defaults_resolve_against_root() {
        let dir = tempfile::tempdir().unwrap();
        let load = ConfigLoader::new()
            .load_from_env(env_with_root(dir.path()))
            .unwrap();

        let config = load.config;
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.dataset_path(), dir.path().join("database.json"));
        assert_eq!(config.assets.public_dir, dir.path().join("public"));
        assert_eq!(config.assets.images_dir, dir.path().join("images"));
        assert!(config.cors.is_permissive());
        assert!(config.metadata.config_path.is_none());
    }

    #[test]
    fn missing_dataset_and_dirs_are_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let load = ConfigLoader::new()
            .load_from_env(env_with_root(dir.path()))
            .unwrap();

        assert_eq!(load.warnings.len(), 3);
    }

    #[test]
    fn file_then_env_then_overrides() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("animedex.toml"),
            r#"
            [server]
            host = "127.0.0.1"
            port = 4000

            [catalog]
            dataset = "data/catalog.json"

            [cors]
            allowed_origins = ["https://file.test"]
            "#,
        )
        .unwrap();

        let env = EnvConfig {
            port: Some(5000),
            port_raw: Some("5000".into()),
            cors_allowed_origins: Some(vec!["https://env.test".into()]),
            ..env_with_root(dir.path())
        };
        let overrides = ConfigOverrides {
            port: Some(6000),
            ..ConfigOverrides::default()
        };

        let config = ConfigLoader::new()
            .with_overrides(overrides)
            .load_from_env(env)
            .unwrap()
            .config;

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 6000);
        assert_eq!(
            config.dataset_path(),
            dir.path().join("data/catalog.json")
        );
        assert_eq!(config.cors.allowed_origins, ["https://env.test"]);
        assert_eq!(
            config.metadata.config_path,
            Some(dir.path().join("animedex.toml"))
        );
    }

    #[test]
    fn absolute_paths_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = dir.path().join("elsewhere.json");
        let env = EnvConfig {
            dataset_path: Some(dataset.clone()),
            ..env_with_root(Path::new("/srv/animedex"))
        };

        let config = ConfigLoader::new().load_from_env(env).unwrap().config;
        assert_eq!(config.dataset_path(), dataset);
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = ConfigLoader::new()
            .with_config_path(&missing)
            .load_from_env(env_with_root(dir.path()))
            .unwrap_err();

        match err {
            ConfigLoadError::MissingConfig { path } => assert_eq!(path, missing),
            other => panic!("expected missing config, got {other}"),
        }
    }

    #[test]
    fn malformed_config_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("animedex.toml");
        fs::write(&path, "[server\nport = ").unwrap();

        let err = ConfigLoader::new()
            .load_from_env(env_with_root(dir.path()))
            .unwrap_err();
        assert!(matches!(err, ConfigLoadError::Parse { .. }));
    }

    #[test]
    fn unparsable_port_falls_back_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        let env = EnvConfig {
            port_raw: Some("eighty".into()),
            ..env_with_root(dir.path())
        };

        let load = ConfigLoader::new().load_from_env(env).unwrap();
        assert_eq!(load.config.server.port, 3000);
        assert!(
            load.warnings
                .iter()
                .any(|warning| warning.message.contains("eighty"))
        );
    }
}
