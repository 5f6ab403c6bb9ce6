//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use chatshop_cache::{Cache, FileStore};
use chatshop_commerce::prelude::*;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the config was loaded from, if anywhere.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = resolve(&cwd, path);
            (CliConfig::load(&path)?, Some(path))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((path, config)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        if let Some(ref path) = config_path {
            output.debug(&format!("Using config: {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(PathBuf, CliConfig)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(&config_path) {
                        Ok(config) => return Some((config_path, config)),
                        Err(e) => tracing::warn!(error = %format!("{e:#}"), "skipping config"),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Directory relative config paths are resolved against: the config
    /// file's directory, or the working directory without one.
    pub fn base_dir(&self) -> &Path {
        self.config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(self.cwd.as_path())
    }

    /// Directory the cart is persisted in.
    pub fn store_dir(&self) -> PathBuf {
        resolve(self.base_dir(), &self.config.store.dir)
    }

    /// Open the cart storage.
    pub fn open_cache(&self) -> Result<Cache<FileStore>> {
        let dir = self.store_dir();
        Cache::open_dir(&dir)
            .with_context(|| format!("Failed to open cart storage: {}", dir.display()))
    }

    /// Load the configured catalog, or the sample catalog if none is set.
    pub fn catalog(&self) -> Result<ProductCatalog> {
        let currency = self.config.currency()?;

        let Some(ref path) = self.config.catalog.path else {
            let sample = ProductCatalog::sample();
            if sample.currency() != currency {
                tracing::warn!(
                    configured = currency.code(),
                    "sample catalog is priced in {}",
                    sample.currency().code()
                );
            }
            return Ok(sample);
        };

        let path = resolve(self.base_dir(), path);
        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        ProductCatalog::from_json(&json, currency)
            .with_context(|| format!("Invalid catalog: {}", path.display()))
    }

    /// Checkout encoder built from the `[checkout]` section, optionally
    /// sending to another contact.
    pub fn encoder(&self, destination: Option<String>) -> Result<CheckoutEncoder> {
        let mut settings = self.config.checkout_settings()?;
        if destination.is_some() {
            settings.destination = destination;
        }
        Ok(CheckoutEncoder::new(settings))
    }

    /// Formatter for amounts shown in the terminal.
    pub fn price_format(&self) -> Result<PriceFormat> {
        Ok(PriceFormat::new(self.config.locale()?))
    }
}

/// Resolve `path` against `base` unless it is already absolute.
fn resolve(base: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_in(dir: &Path, config_path: Option<PathBuf>, config: CliConfig) -> Context {
        Context {
            config,
            config_path,
            output: Output::new(false, true),
            cwd: dir.to_path_buf(),
        }
    }

    #[test]
    fn test_find_config_walks_up() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            root.path().join("chatshop.toml"),
            "[checkout]\ndestination = \"34600000000\"\n",
        )
        .unwrap();

        let (path, config) = Context::find_config(&nested).unwrap();
        assert_eq!(path, root.path().join("chatshop.toml"));
        assert_eq!(config.checkout.destination.as_deref(), Some("34600000000"));
    }

    #[test]
    fn test_paths_resolve_against_config_dir() {
        let root = tempfile::tempdir().unwrap();
        let cwd = root.path().join("sub");
        let ctx = context_in(&cwd, Some(root.path().join("chatshop.toml")), CliConfig::default());

        assert_eq!(ctx.base_dir(), root.path());
        assert_eq!(ctx.store_dir(), root.path().join(".chatshop"));
    }

    #[test]
    fn test_catalog_defaults_to_sample() {
        let root = tempfile::tempdir().unwrap();
        let ctx = context_in(root.path(), None, CliConfig::default());
        assert_eq!(ctx.catalog().unwrap().len(), 8);
    }

    #[test]
    fn test_catalog_from_file() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(
            root.path().join("catalog.json"),
            r#"[{"id": 1, "name": "Mug", "description": "Ceramic", "price": "9.50",
                 "imageUrl": "https://example.com/mug.jpg", "category": "kitchen"}]"#,
        )
        .unwrap();

        let mut config = CliConfig::default();
        config.catalog.path = Some("catalog.json".to_string());
        let ctx = context_in(root.path(), None, config);

        let catalog = ctx.catalog().unwrap();
        assert_eq!(catalog.categories(), vec!["kitchen"]);
    }

    #[test]
    fn test_encoder_destination_override() {
        let root = tempfile::tempdir().unwrap();
        let mut config = CliConfig::default();
        config.checkout.destination = Some("34600000000".to_string());
        let ctx = context_in(root.path(), None, config);

        let configured = ctx.encoder(None).unwrap();
        assert_eq!(configured.settings().destination.as_deref(), Some("34600000000"));

        let other = ctx.encoder(Some("34611111111".to_string())).unwrap();
        assert_eq!(other.settings().destination.as_deref(), Some("34611111111"));
    }

    #[test]
    fn test_cart_persists_in_store_dir() {
        let root = tempfile::tempdir().unwrap();
        let ctx = context_in(root.path(), None, CliConfig::default());
        let catalog = ctx.catalog().unwrap();

        {
            let mut store = CartStore::restore(&catalog, ctx.open_cache().unwrap());
            store.add_by_id(ProductId::new(2), 2).unwrap();
        }

        assert!(root.path().join(".chatshop").join("cart.json").exists());
        let store = CartStore::restore(&catalog, ctx.open_cache().unwrap());
        assert_eq!(store.total_items(), 2);
    }
}
