use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

use crate::currency::DEFAULT_SOURCE_CURRENCY;

pub const DEFAULT_BASE_URL: &str = "https://api.currencylayer.com";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProviderConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub access_key: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_source_currency() -> String {
    DEFAULT_SOURCE_CURRENCY.to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub provider: ProviderConfig,
    #[serde(default = "default_source_currency")]
    pub source_currency: String,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "bonustrack02", "fxcalc")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
provider:
  access_key: "abc123"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.provider.access_key, "abc123");
        assert_eq!(config.provider.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.source_currency, "USD");

        let yaml_str_full = r#"
provider:
  base_url: "http://example.com/rates"
  access_key: "abc123"
source_currency: "EUR"
"#;
        let config_full: AppConfig = serde_yaml::from_str(yaml_str_full).unwrap();
        assert_eq!(config_full.provider.base_url, "http://example.com/rates");
        assert_eq!(config_full.source_currency, "EUR");
    }

    #[test]
    fn test_config_requires_access_key() {
        let yaml_str = r#"
provider:
  base_url: "http://example.com/rates"
"#;
        assert!(serde_yaml::from_str::<AppConfig>(yaml_str).is_err());
    }
}
