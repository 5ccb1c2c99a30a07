//! Server configuration.
//!
//! Values are layered, later sources winning:
//!
//! 1. built-in defaults (`0.0.0.0:4221`, no file directory)
//! 2. an optional YAML file given with `--config`
//! 3. `LISTEN` / `DIRECTORY` environment variables
//! 4. `--listen` / `--directory` flags
//!
//! ```yaml
//! server:
//!   listen_addr: "0.0.0.0:4221"
//! files:
//!   directory: "/var/lib/tinyhttp"
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;

use crate::router::FileStore;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:4221";

/// Command line arguments.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "tinyhttp")]
#[command(about = "Minimal HTTP/1.1 server with echo and file routes")]
pub struct Args {
    /// Directory that /files/ reads from and writes to
    #[arg(long, env = "DIRECTORY")]
    pub directory: Option<PathBuf>,

    /// Address to listen on
    #[arg(long, env = "LISTEN")]
    pub listen: Option<String>,

    /// YAML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub files: FilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    /// Root for `/files/*`. File routes are disabled when unset.
    pub directory: Option<PathBuf>,
}

impl Config {
    /// Builds the configuration from the process arguments and environment.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> anyhow::Result<Self> {
        let mut cfg = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(listen) = args.listen {
            cfg.server.listen_addr = listen;
        }
        if let Some(dir) = args.directory {
            cfg.files.directory = Some(dir);
        }

        // An empty directory means none.
        if cfg
            .files
            .directory
            .as_ref()
            .is_some_and(|d| d.as_os_str().is_empty())
        {
            cfg.files.directory = None;
        }

        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml(&raw).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    pub fn file_store(&self) -> FileStore {
        match &self.files.directory {
            Some(dir) => FileStore::new(dir.clone()),
            None => FileStore::disabled(),
        }
    }
}
