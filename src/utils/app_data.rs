use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const APP_NAME: &str = "boolsearch";
const CONFIG_FILE: &str = "config.json";

pub const DEFAULT_PROMPT: &str = "Enter query sentence (press enter to quit): ";

/// Application configuration stored in the app data directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Colorize result output when stdout is a terminal
    #[serde(default = "default_color")]
    pub color: bool,

    /// Prompt printed before each interactive query
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Number of terms listed by `stats`
    #[serde(default = "default_top_terms")]
    pub top_terms: usize,
}

fn default_color() -> bool {
    true
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_top_terms() -> usize {
    10
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            prompt: default_prompt(),
            top_terms: default_top_terms(),
        }
    }
}

impl AppConfig {
    /// Load config from the app data directory, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&get_config_path()?)
    }

    /// Like [`AppConfig::load`], but an unreadable or malformed config falls
    /// back to defaults instead of failing
    pub fn load_or_default() -> Self {
        get_config_path()
            .and_then(|path| Self::load_from(&path))
            .unwrap_or_else(|e| {
                warn!("using default config: {:#}", e);
                Self::default()
            })
    }

    pub fn load_from_or_default(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            warn!("using default config: {:#}", e);
            Self::default()
        })
    }

    /// Load config from an explicit file, or return default if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save config to the app data directory
    pub fn save(&self) -> Result<PathBuf> {
        let config_path = get_config_path()?;
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_app_data_dir()?.join(CONFIG_FILE))
}

/// Get the per-user application data directory
pub fn get_app_data_dir() -> Result<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs::home_dir().map(|h| h.join("Library").join("Application Support"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
    } else {
        // Linux/Unix: use XDG_DATA_HOME or ~/.local/share
        dirs::data_dir()
    };

    let base = base.context("Could not determine app data directory")?;
    Ok(base.join(APP_NAME))
}
