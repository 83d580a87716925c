use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, SkyrouteError};

/// Top-level configuration for SkyRoute.
///
/// Loaded from `~/.skyroute/config.toml` by default. Every section falls back
/// to its defaults when missing from the file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkyrouteConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub agent: AgentConfig,
}

impl SkyrouteConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SkyrouteConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| SkyrouteError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Language model settings shared by interpretation and generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Inline API key. Prefer `api_key_env` outside of local experiments.
    pub api_key: Option<String>,
    /// Environment variable consulted when `api_key` is unset.
    pub api_key_env: String,
    /// Gemini model name.
    pub model: String,
    /// Base endpoint URL.
    pub endpoint: String,
    /// Sampling temperature (0.0 - 2.0).
    pub temperature: f32,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: "GEMINI_API_KEY".to_string(),
            model: "gemini-2.5-flash-lite".to_string(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            temperature: 0.2,
            timeout_secs: 30,
        }
    }
}

impl LlmConfig {
    /// Resolve the API key: inline value first, then `api_key_env`.
    ///
    /// Blank values count as missing.
    pub fn resolve_api_key(&self) -> Option<String> {
        let inline = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty());
        if let Some(key) = inline {
            return Some(key.to_string());
        }
        std::env::var(&self.api_key_env)
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
    }
}

/// Conversation defaults applied when the interpreted intent omits a slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Passenger name used when a booking names nobody.
    pub default_passenger: String,
    /// Origin used when a search omits it.
    pub default_origin: String,
    /// Destination used when a search omits it.
    pub default_destination: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            default_passenger: "Guest".to_string(),
            default_origin: "Unknown".to_string(),
            default_destination: "Unknown".to_string(),
        }
    }
}
