// Application configuration.
// Loaded from config.toml in the platform config dir; every field has a default.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::campaign::DateStyle;
use crate::error::Result;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Settle window after collapsing or expanding the sidebar, in milliseconds
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    /// Route the app moves to on logout
    #[serde(default = "default_login_route")]
    pub login_route: String,
    /// Route shown after signing in
    #[serde(default = "default_home_route")]
    pub home_route: String,
    /// Role shown when no user (or no role) is stored
    #[serde(default = "default_role")]
    pub default_role: String,
    /// Date field order; follows the environment locale when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_style: Option<DateStyle>,
    /// Campaigns data file; defaults to campaigns.json in the data dir
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaigns_path: Option<PathBuf>,
}

fn default_settle_delay_ms() -> u64 {
    300
}

fn default_login_route() -> String {
    "/login".to_string()
}

fn default_home_route() -> String {
    "/campaigns".to_string()
}

fn default_role() -> String {
    "agency".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settle_delay_ms: default_settle_delay_ms(),
            login_route: default_login_route(),
            home_route: default_home_route(),
            default_role: default_role(),
            date_style: None,
            campaigns_path: None,
        }
    }
}

impl Config {
    /// Load configuration from file, writing the defaults if it doesn't exist.
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)?;
            tracing::info!(path = %config_path.display(), "loaded config");
            Ok(config)
        } else {
            let config = Self::default();
            config.save(config_path)?;
            tracing::info!(path = %config_path.display(), "wrote default config");
            Ok(config)
        }
    }

    /// Save configuration to file.
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Configured date style, or the one matching the environment locale.
    pub fn date_style(&self) -> DateStyle {
        self.date_style.unwrap_or_else(DateStyle::from_env)
    }
}
