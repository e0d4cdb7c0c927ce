//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront::catalog::Catalog;
use storefront::config::StorefrontConfig;
use storefront::Storefront;

use crate::output::Output;

/// Catalog used when neither the flag nor the config names one.
pub const DEFAULT_CATALOG: &str = "data/products.json";

/// Execution context for CLI commands.
pub struct Context {
    /// Storefront configuration.
    pub config: StorefrontConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    catalog_override: Option<PathBuf>,
}

impl Context {
    /// Load context from an explicit config file or the nearest one above
    /// the working directory.
    pub fn load(config_path: Option<&str>, catalog: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config_path = match config_path {
            Some(path) => Some(resolve(&cwd, path)),
            None => StorefrontConfig::find(&cwd),
        };

        let config = match &config_path {
            Some(path) => {
                output.debug(&format!("Using config {}", path.display()));
                StorefrontConfig::load(path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?
            }
            None => {
                output.debug("No config file found, using built-in defaults");
                StorefrontConfig::default()
            }
        };

        Ok(Self {
            config,
            config_path,
            output,
            catalog_override: catalog.map(|path| resolve(&cwd, path)),
            cwd,
        })
    }

    /// Catalog path: `--catalog`, then the config, then the default location.
    pub fn catalog_path(&self) -> PathBuf {
        self.catalog_override
            .clone()
            .or_else(|| self.config.catalog.path.clone())
            .unwrap_or_else(|| self.cwd.join(DEFAULT_CATALOG))
    }

    /// Load the catalog.
    pub fn load_catalog(&self) -> Result<Catalog> {
        let path = self.catalog_path();
        self.output.debug(&format!("Loading catalog {}", path.display()));
        Catalog::load(&path).with_context(|| format!("Failed to load catalog {}", path.display()))
    }

    /// Start a shopping session over the catalog.
    pub fn storefront(&self) -> Result<Storefront> {
        Ok(Storefront::new(self.load_catalog()?, self.config.clone()))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}
