//! CLI configuration.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use chatshop_commerce::checkout::{DEFAULT_GREETING, DEFAULT_MESSAGING_HOST, DEFAULT_SOFT_LINK_LIMIT};
use chatshop_commerce::prelude::*;
use serde::{Deserialize, Serialize};

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["chatshop.toml", ".chatshop.toml", "chatshop.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Cart storage.
    #[serde(default)]
    pub store: StoreConfig,

    /// Product catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Order message and deep link.
    #[serde(default)]
    pub checkout: CheckoutConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
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
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Currency the catalog is priced in.
    pub fn currency(&self) -> Result<Currency> {
        Currency::from_code(&self.catalog.currency)
            .ok_or_else(|| anyhow!("Unsupported currency: {}", self.catalog.currency))
    }

    /// Locale amounts are written in. Falls back to the currency's locale.
    pub fn locale(&self) -> Result<Locale> {
        match self.checkout.locale.as_deref() {
            Some(tag) => Locale::from_tag(tag).ok_or_else(|| anyhow!("Unsupported locale: {tag}")),
            None => Ok(self.currency()?.default_locale()),
        }
    }

    /// Encoder settings for this config.
    pub fn checkout_settings(&self) -> Result<CheckoutSettings> {
        Ok(CheckoutSettings {
            host: self.checkout.host.clone(),
            destination: self.checkout.destination.clone(),
            greeting: Some(self.checkout.greeting.clone()).filter(|g| !g.trim().is_empty()),
            format: PriceFormat::new(self.locale()?),
            soft_link_limit: Some(self.checkout.soft_link_limit).filter(|&limit| limit > 0),
        })
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Cart storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Directory holding the cart file, relative to the config file.
    #[serde(default = "default_store_dir")]
    pub dir: String,
}

fn default_store_dir() -> String {
    ".chatshop".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: default_store_dir(),
        }
    }
}

/// Catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// JSON product file. The built-in sample catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// ISO 4217 code every product is priced in.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    Currency::default().code().to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            currency: default_currency(),
        }
    }
}

/// Checkout configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutConfig {
    /// Messaging host (default: wa.me).
    #[serde(default = "default_host")]
    pub host: String,

    /// Merchant phone number or handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,

    /// Opening line of the order message. Empty for none.
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// BCP 47 tag for amounts, e.g. `es-ES`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Warn when a link grows past this many bytes. 0 turns the warning off.
    #[serde(default = "default_soft_link_limit")]
    pub soft_link_limit: usize,
}

fn default_host() -> String {
    DEFAULT_MESSAGING_HOST.to_string()
}

fn default_greeting() -> String {
    DEFAULT_GREETING.to_string()
}

fn default_soft_link_limit() -> usize {
    DEFAULT_SOFT_LINK_LIMIT
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            destination: None,
            greeting: default_greeting(),
            locale: None,
            soft_link_limit: default_soft_link_limit(),
        }
    }
}

/// Generate a default chatshop.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Chatshop configuration

[store]
dir = ".chatshop"

[catalog]
# path = "catalog.json"
currency = "EUR"

[checkout]
host = "{host}"
# destination = "34600000000"
greeting = "{greeting}"           # "" for no greeting
locale = "es-ES"
soft_link_limit = {limit}             # 0 turns off the long-link warning
"#,
        host = DEFAULT_MESSAGING_HOST,
        greeting = DEFAULT_GREETING,
        limit = DEFAULT_SOFT_LINK_LIMIT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        let mut expected = CliConfig::default();
        expected.checkout.locale = Some("es-ES".to_string());
        assert_eq!(config, expected);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config.store.dir, ".chatshop");
        assert_eq!(config.currency().unwrap(), Currency::EUR);
        assert_eq!(config.locale().unwrap(), Locale::EsEs);
        assert_eq!(config.checkout_settings().unwrap(), CheckoutSettings::default());
    }

    #[test]
    fn test_locale_follows_currency() {
        let config: CliConfig = toml::from_str("[catalog]\ncurrency = \"USD\"\n").unwrap();
        assert_eq!(config.locale().unwrap(), Locale::EnUs);
    }

    #[test]
    fn test_unsupported_values_rejected() {
        let config: CliConfig =
            toml::from_str("[catalog]\ncurrency = \"XYZ\"\n[checkout]\nlocale = \"fr-FR\"\n")
                .unwrap();
        assert!(config.currency().is_err());
        assert!(config.checkout_settings().is_err());
    }

    #[test]
    fn test_disabled_greeting_and_limit_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chatshop.toml");

        let mut config = CliConfig::default();
        config.checkout.greeting = String::new();
        config.checkout.soft_link_limit = 0;
        config.save(&path).unwrap();

        let loaded = CliConfig::load(&path).unwrap();
        assert_eq!(loaded, config);

        let settings = loaded.checkout_settings().unwrap();
        assert_eq!(settings.greeting, None);
        assert_eq!(settings.soft_link_limit, None);
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chatshop.json");

        let mut config = CliConfig::default();
        config.checkout.destination = Some("34600000000".to_string());
        config.save(&path).unwrap();

        assert_eq!(CliConfig::load(&path).unwrap(), config);
    }
}
