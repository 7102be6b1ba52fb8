use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Names a YAML file to load instead of `config.yaml`.
pub const CONFIG_ENV: &str = "SNAKE_CONFIG";
pub const PORT_ENV: &str = "PORT";
pub const STATIC_ROOT_ENV: &str = "STATIC_ROOT";

const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Where served content lives.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StaticConfig {
    /// Prefix for every non-home `GET` path
    pub root: PathBuf,
    /// Prefix for the home page, which is `<page_root>/index.html`
    pub page_root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
        }
    }
}

impl ServerConfig {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("public"),
            page_root: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Loads the file named by `SNAKE_CONFIG`, else `config.yaml` when it
    /// exists, else the defaults; then applies `PORT` and `STATIC_ROOT`.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(path)?,
            Err(_) if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            Err(_) => Self::default(),
        };

        cfg.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(cfg)
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Applies overrides from `lookup`, normally the process environment.
    pub fn apply_overrides<L>(&mut self, lookup: L) -> anyhow::Result<()>
    where
        L: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup(PORT_ENV) {
            self.server.port = port
                .parse()
                .with_context(|| format!("invalid {PORT_ENV} value {port:?}"))?;
        }

        if let Some(root) = lookup(STATIC_ROOT_ENV) {
            self.static_files.root = PathBuf::from(root);
        }

        Ok(())
    }
}
