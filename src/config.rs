use crate::keymap::{Keymap, KeymapPreset};
use crate::styles::ThemeType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

/// Where the prediction service listens unless told otherwise.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
/// Overrides [`Config::api_url`] at load time.
pub const API_URL_ENV: &str = "FITNOURISH_API_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the prediction service
    pub api_url: String,
    /// How long the splash screen stays up
    pub splash_delay_ms: u64,
    pub theme: ThemeType,
    pub keymap: Keymap,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            splash_delay_ms: 1400,
            theme: ThemeType::Dark,
            keymap: Keymap::default(),
        }
    }
}

impl Config {
    /// Load the config file, writing the defaults first if it does not exist.
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("No config at {:?}, writing defaults", config_path);
            let config = Self::default();
            config.save(config_path)?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        if config.api_url.trim().is_empty() {
            config.api_url = DEFAULT_API_URL.to_string();
        }
        for binding in config.keymap.invalid_overrides() {
            warn!("Ignoring key override {:?}: cannot parse key", binding.key);
        }
        Ok(config)
    }

    /// Write with 0600 permissions on unix.
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }
        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(config_path, std::fs::Permissions::from_mode(0o600))
                .with_context(|| format!("Failed to set file permissions: {:?}", config_path))?;
        }
        Ok(())
    }

    /// Rewrite only `keymap.preset` in the file at `config_path`. Env and
    /// command-line overrides live in memory and must not reach the file.
    pub fn save_keymap_preset(config_path: &Path, preset: KeymapPreset) -> Result<()> {
        let mut on_disk = Self::load_or_create(config_path)?;
        on_disk.keymap.preset = preset;
        on_disk.save(config_path)
    }

    /// Apply `FITNOURISH_API_URL` and `NO_COLOR` from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply environment-style overrides from `lookup`. Empty values are
    /// ignored, except that any `NO_COLOR` value disables colours.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.api_url = url.trim().to_string();
        }
        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            self.theme = ThemeType::NoColor;
        }
    }

    pub fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_delay_ms)
    }
}
