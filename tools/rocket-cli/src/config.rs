//! CLI configuration.

use std::path::Path;

use anyhow::{bail, Context, Result};
use rocket_commerce::Currency;
use rocket_observability::{LogFormat, LogLevel};
use rocket_store::CART_STORAGE_KEY;
use serde::{Deserialize, Serialize};

/// File names searched for, in order, from the working directory upward.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["rocket.toml", ".rocket.toml", "rocket.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Inventory API settings.
    #[serde(default)]
    pub inventory: InventoryConfig,

    /// Cart persistence settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Problems that make the config unusable.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let url = &self.inventory.base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            errors.push(format!("inventory.base_url must be an http(s) URL, got '{}'", url));
        }
        if self.inventory.timeout_secs == 0 {
            errors.push("inventory.timeout_secs must be greater than 0".to_string());
        }
        if self.storage.dir.trim().is_empty() {
            errors.push("storage.dir is required".to_string());
        }
        if self.storage.key.trim().is_empty() {
            errors.push("storage.key is required".to_string());
        }

        errors
    }

    /// Read a value by dot-separated key.
    pub fn get(&self, key: &str) -> Result<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["inventory", "base_url"] => Ok(self.inventory.base_url.clone()),
            ["inventory", "timeout_secs"] => Ok(self.inventory.timeout_secs.to_string()),
            ["storage", "dir"] => Ok(self.storage.dir.clone()),
            ["storage", "key"] => Ok(self.storage.key.clone()),
            ["display", "currency"] => Ok(self.display.currency.code().to_string()),
            ["logging", "format"] => Ok(format!("{:?}", self.logging.format).to_lowercase()),
            ["logging", "level"] => Ok(self.logging.level.as_str().to_string()),
            _ => bail!("Unknown config key: {}", key),
        }
    }

    /// Write a value by dot-separated key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["inventory", "base_url"] => self.inventory.base_url = value.to_string(),
            ["inventory", "timeout_secs"] => self.inventory.timeout_secs = value.parse()?,
            ["storage", "dir"] => self.storage.dir = value.to_string(),
            ["storage", "key"] => self.storage.key = value.to_string(),
            ["display", "currency"] => {
                self.display.currency = Currency::from_code(value)
                    .with_context(|| format!("Unsupported currency: {}", value))?
            }
            ["logging", "format"] => self.logging.format = value.parse()?,
            ["logging", "level"] => self.logging.level = value.parse()?,
            _ => bail!("Unknown config key: {}", key),
        }

        Ok(())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Inventory API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Base URL serving `/stock/{id}` and `/products/{id}`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:3333".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Cart persistence settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the key-value files, relative to the config file.
    #[serde(default = "default_storage_dir")]
    pub dir: String,

    /// Key of the cart snapshot.
    #[serde(default = "default_storage_key")]
    pub key: String,
}

fn default_storage_dir() -> String {
    ".rocket".to_string()
}

fn default_storage_key() -> String {
    CART_STORAGE_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
            key: default_storage_key(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub currency: Currency,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,

    #[serde(default)]
    pub level: LogLevel,
}

/// Generate a default rocket.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# RocketCart configuration

[inventory]
base_url = "{base_url}"
timeout_secs = {timeout}

[storage]
dir = "{dir}"
key = "{key}"

[display]
currency = "BRL"

[logging]
format = "human"
level = "info"
"#,
        base_url = default_base_url(),
        timeout = default_timeout_secs(),
        dir = default_storage_dir(),
        key = CART_STORAGE_KEY,
    )
}
