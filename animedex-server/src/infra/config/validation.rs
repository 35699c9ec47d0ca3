use std::fmt;

use super::{models::Config, sources::EnvConfig};

/// Non-fatal configuration issue reported at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

impl ConfigWarning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.hint {
            Some(hint) => write!(f, "{} ({hint})", self.message),
            None => f.write_str(&self.message),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigWarnings {
    items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push(&mut self, warning: ConfigWarning) {
        self.items.push(warning);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }
}

pub(crate) fn collect_warnings(config: &Config, env: &EnvConfig) -> ConfigWarnings {
    let mut warnings = ConfigWarnings::default();

    if let (Some(raw), None) = (&env.port_raw, env.port) {
        warnings.push(
            ConfigWarning::new(format!("ignoring unparsable PORT value '{raw}'"))
                .with_hint(format!("using port {}", config.server.port)),
        );
    }

    if !config.catalog.dataset_path.exists() {
        warnings.push(
            ConfigWarning::new(format!(
                "dataset {} does not exist",
                config.catalog.dataset_path.display()
            ))
            .with_hint("the catalog will start empty"),
        );
    }

    if !config.assets.public_dir.is_dir() {
        warnings.push(ConfigWarning::new(format!(
            "public directory {} does not exist",
            config.assets.public_dir.display()
        )));
    }

    if !config.assets.images_dir.is_dir() {
        warnings.push(ConfigWarning::new(format!(
            "images directory {} does not exist",
            config.assets.images_dir.display()
        )));
    }

    warnings
}
