//! Run configuration
//!
//! Loaded from a TOML file; every section and field has a default so a
//! partial (or missing) config file still yields a usable run.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{M3uError, Result};

/// Remote API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the catalog service
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://ppv.land".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the generated playlist file
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("playlist.m3u"),
        }
    }
}

/// Title formatting settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// IANA timezone id used for display times
    pub timezone: String,

    /// Schedules that ended more than this many days ago are treated as
    /// always-on channels
    pub stale_after_days: i64,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            timezone: "America/New_York".to_string(),
            stale_after_days: 30,
        }
    }
}

impl FormatConfig {
    /// Parse the configured timezone id against the tz database.
    pub fn timezone(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| M3uError::Config(format!("invalid timezone {:?}: {}", self.timezone, e)))
    }

    /// Staleness threshold as a duration. Rejects negative values and
    /// values outside chrono's representable range.
    pub fn stale_after(&self) -> Result<chrono::Duration> {
        if self.stale_after_days < 0 {
            return Err(M3uError::Config(format!(
                "stale_after_days must be non-negative, got {}",
                self.stale_after_days
            )));
        }
        chrono::Duration::try_days(self.stale_after_days).ok_or_else(|| {
            M3uError::Config(format!(
                "stale_after_days out of range: {}",
                self.stale_after_days
            ))
        })
    }
}

/// Publish-step settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    /// Commit and push the playlist after generation
    pub enabled: bool,

    /// Git remote to push to
    pub remote: String,

    /// Branch to push to
    pub branch: String,

    /// Commit message for the playlist update
    pub commit_message: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            remote: "origin".to_string(),
            branch: "main".to_string(),
            commit_message: "Update playlist".to_string(),
        }
    }
}

/// Full run configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote API settings
    pub api: ApiConfig,

    /// Output settings
    pub output: OutputConfig,

    /// Title formatting settings
    pub format: FormatConfig,

    /// Publish-step settings
    pub publish: PublishConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
