//! Optional TOML configuration for the scraper defaults.
//!
//! Load priority: explicit path > `~/.config/pagescrape/config.toml` >
//! built-in defaults. CLI flags override config values when present.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::{Result, ScrapeError};

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Node.js command used to run the Playwright helper.
    pub node_command: String,
    /// Whether to run the browser in headless mode.
    pub headless: bool,
    pub timeouts: Timeouts,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Timeouts {
    /// Navigation and selector-wait timeout, in seconds.
    pub navigation: u64,
    /// Watchdog timeout for the whole helper process, in seconds.
    pub process: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            navigation: 30,
            process: 45,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            node_command: "node".to_string(),
            headless: true,
            timeouts: Timeouts::default(),
        }
    }
}

impl Config {
    /// Loads config from an explicit path, the central config file if one
    /// exists, or returns defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::central_config_path().filter(|p| p.exists()),
        };
        let Some(file) = file else {
            return Ok(Self::default());
        };

        let body = fs::read_to_string(&file).map_err(|e| {
            ScrapeError::Config(format!("Failed to read config {}: {}", file.display(), e))
        })?;
        let cfg: Config = toml::from_str(&body).map_err(|e| {
            ScrapeError::Config(format!("Invalid config ({}): {}", file.display(), e))
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Central per-user config location.
    pub fn central_config_path() -> Option<PathBuf> {
        std::env::var_os("HOME").map(|home| {
            PathBuf::from(home)
                .join(".config")
                .join("pagescrape")
                .join("config.toml")
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.node_command.trim().is_empty() {
            return Err(ScrapeError::config("node_command must not be empty"));
        }
        if self.timeouts.navigation == 0 {
            return Err(ScrapeError::config(
                "timeouts.navigation must be greater than zero",
            ));
        }
        if self.timeouts.process == 0 {
            return Err(ScrapeError::config(
                "timeouts.process must be greater than zero",
            ));
        }
        Ok(())
    }

    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_secs(self.timeouts.navigation)
    }

    pub fn process_timeout(&self) -> Duration {
        Duration::from_secs(self.timeouts.process)
    }
}
