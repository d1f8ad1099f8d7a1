//! CLI configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use luxe_stylist::gemini::{API_KEY_ENV, DEFAULT_MODEL};
use serde::{Deserialize, Serialize};

/// File names searched for, in order, from the working directory upward.
pub const CONFIG_NAMES: [&str; 3] = ["luxe.toml", ".luxe.toml", "luxe.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Stylist configuration.
    #[serde(default)]
    pub stylist: StylistConfig,

    /// Where the wishlist and recently viewed lists live.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Browse defaults.
    #[serde(default)]
    pub browse: BrowseConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(path, &content)
    }

    fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content).with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// Stylist configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StylistConfig {
    /// Gemini model name.
    #[serde(default = "default_model")]
    pub model: String,

    /// API root override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_key_env() -> String {
    API_KEY_ENV.to_string()
}

impl Default for StylistConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: None,
            api_key_env: default_api_key_env(),
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    /// State file path (default: ~/.local/share/luxe/state.json).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl StorageConfig {
    /// The configured path, or the default under the user data directory.
    pub fn resolved_path(&self) -> PathBuf {
        match &self.path {
            Some(path) => PathBuf::from(path),
            None => data_dir().join("luxe").join("state.json"),
        }
    }
}

/// Browse defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BrowseConfig {
    /// Default price ceiling in whole dollars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<i64>,
}

/// Get the platform-specific data directory.
fn data_dir() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local").join("share")
    } else {
        std::env::temp_dir()
    }
}

/// Generate a default luxe.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Lumina Luxe CLI configuration

[stylist]
model = "{model}"
api_key_env = "{key_env}"
# base_url = "https://generativelanguage.googleapis.com/v1beta"

[storage]
# path = "~/.local/share/luxe/state.json"

[browse]
# max_price = 1500
"#,
        model = DEFAULT_MODEL,
        key_env = API_KEY_ENV,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = CliConfig::parse("luxe.toml", "").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.stylist.model, "gemini-3-flash-preview");
        assert_eq!(config.stylist.api_key_env, "GEMINI_API_KEY");
    }

    #[test]
    fn test_generated_config_parses() {
        let config = CliConfig::parse("luxe.toml", &generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_json_config() {
        let config = CliConfig::parse(
            "luxe.json",
            r#"{"stylist": {"model": "gemini-pro"}, "browse": {"max_price": 500}}"#,
        )
        .unwrap();
        assert_eq!(config.stylist.model, "gemini-pro");
        assert_eq!(config.browse.max_price, Some(500));
        assert_eq!(config.stylist.api_key_env, "GEMINI_API_KEY");
    }

    #[test]
    fn test_storage_path() {
        let storage = StorageConfig {
            path: Some("/tmp/luxe.json".to_string()),
        };
        assert_eq!(storage.resolved_path(), PathBuf::from("/tmp/luxe.json"));
        assert!(StorageConfig::default()
            .resolved_path()
            .ends_with("luxe/state.json"));
    }
}
