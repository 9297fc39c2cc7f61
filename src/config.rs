use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::downloader::Timeouts;

pub const DEFAULT_OUTPUT_DIR: &str = "Fetched_Images";

/// Settings loaded from `~/.config/image-fetcher/config.toml`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// Directory that receives saved images, relative to the working directory.
    pub output_dir: PathBuf,
    pub get_timeout_secs: u64,
    pub head_timeout_secs: u64,
    /// Above this declared size the safety check asks before downloading.
    pub max_image_bytes: u64,
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            get_timeout_secs: 10,
            head_timeout_secs: 5,
            max_image_bytes: 10 * 1024 * 1024,
            user_agent: concat!("image-fetcher/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FetcherConfig {
    pub fn timeouts(&self) -> Timeouts {
        Timeouts {
            get: Duration::from_secs(self.get_timeout_secs),
            head: Duration::from_secs(self.head_timeout_secs),
        }
    }

    pub fn from_toml(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }
}

/// `config.toml` under the XDG config directories, if one exists.
pub fn find_default_config() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("image-fetcher")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Reads `path` when given, else the default location if it exists, else built-in defaults.
pub fn load(path: Option<&Path>) -> Result<FetcherConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match find_default_config()? {
            Some(path) => path,
            None => return Ok(FetcherConfig::default()),
        },
    };

    let data =
        fs::read_to_string(&path).with_context(|| format!("read config {}", path.display()))?;
    let cfg = FetcherConfig::from_toml(&data)
        .with_context(|| format!("parse config {}", path.display()))?;

    tracing::debug!(path = %path.display(), "loaded config");

    Ok(cfg)
}
