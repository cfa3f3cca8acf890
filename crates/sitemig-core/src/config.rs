use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/sitemig/config.toml`.
///
/// Holds policy knobs only; the sitemap URL and new base URL are per-run
/// inputs supplied on the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitemigConfig {
    /// Overall deadline for one availability probe, in seconds.
    pub probe_timeout_secs: u64,
    /// Connect timeout for all HTTP requests, in seconds.
    pub connect_timeout_secs: u64,
    /// Skip patterns applied when the command line passes none.
    /// An original URL containing any of these substrings is not checked.
    #[serde(default)]
    pub skip_patterns: Vec<String>,
}

impl Default for SitemigConfig {
    fn default() -> Self {
        Self {
            probe_timeout_secs: 10,
            connect_timeout_secs: 15,
            skip_patterns: Vec::new(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sitemig")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SitemigConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SitemigConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SitemigConfig = toml::from_str(&data)?;
    Ok(cfg)
}
