//! TOML configuration.
//!
//! ```toml
//! [db]
//! path = "./data/compass.sqlite"
//!
//! [server]
//! bind = "127.0.0.1:7340"
//!
//! [catalog]
//! seed_builtin = true
//! ```
//!
//! Only `[db]` is required; the other sections fall back to defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub db: DbConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DbConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:7340".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Seed the built-in patterns when `serve` starts against an empty catalog.
    #[serde(default = "default_seed_builtin")]
    pub seed_builtin: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_builtin: default_seed_builtin(),
        }
    }
}

fn default_seed_builtin() -> bool {
    true
}

/// Load and validate the configuration file.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.db.path.as_os_str().is_empty() {
        anyhow::bail!("db.path must not be empty");
    }

    config
        .server
        .bind
        .parse::<SocketAddr>()
        .with_context(|| format!("server.bind must be an IP:port address, got '{}'", config.server.bind))?;

    Ok(config)
}
