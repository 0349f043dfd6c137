//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context as _, Result};
use rocket_cache::{Cache, FileStore};
use rocket_data::{FetchClient, HttpInventory};
use rocket_store::{CartHandle, CartRepository, CartStore};

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// File the config came from, if any.
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
        Self::load_from(&cwd, config_path, output)
    }

    fn load_from(cwd: &Path, config_path: Option<&str>, output: Output) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => Some(resolve(cwd, path)),
            None => find_config(cwd),
        };

        let config = match &config_path {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd: cwd.to_path_buf(),
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }

    /// Directory holding the persisted cart.
    ///
    /// Relative paths are taken from the config file's directory, or from the
    /// working directory when running on defaults.
    pub fn storage_dir(&self) -> PathBuf {
        match self.config_path.as_deref().and_then(Path::parent) {
            Some(base) => resolve(base, &self.config.storage.dir),
            None => self.resolve_path(&self.config.storage.dir),
        }
    }

    /// Wire up the cart against the configured inventory and storage.
    pub fn open_cart(&self) -> Result<CartHandle> {
        let inventory = &self.config.inventory;
        let client = FetchClient::with_timeout(Duration::from_secs(inventory.timeout_secs))
            .context("Failed to build HTTP client")?
            .with_base_url(inventory.base_url.as_str());

        let dir = self.storage_dir();
        let store = FileStore::open(&dir)
            .with_context(|| format!("Failed to open cart storage: {}", dir.display()))?;
        let repository =
            CartRepository::new(Cache::new(store)).with_key(self.config.storage.key.as_str());

        let cart = CartStore::open(Arc::new(HttpInventory::new(client)), repository)
            .context("Failed to load cart")?;

        self.output
            .debug(&format!("inventory: {}", inventory.base_url));
        self.output.debug(&format!("storage: {}", dir.display()));

        Ok(CartHandle::new(Arc::new(cart), Arc::new(self.output.clone())))
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

/// Find a config file in the directory tree.
fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_FILE_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet() -> Output {
        Output::new(false, false)
    }

    #[test]
    fn test_defaults_without_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context::load_from(dir.path(), None, quiet()).unwrap();

        // A parent of the temp dir may carry a config; only assert when none was found.
        if ctx.config_path.is_none() {
            assert_eq!(ctx.config, CliConfig::default());
            assert_eq!(ctx.storage_dir(), dir.path().join(".rocket"));
        }
        assert_eq!(ctx.cwd, dir.path());
    }

    #[test]
    fn test_finds_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("rocket.toml"),
            "[storage]\ndir = \"carts\"\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let ctx = Context::load_from(&nested, None, quiet()).unwrap();

        assert_eq!(ctx.config_path, Some(dir.path().join("rocket.toml")));
        assert_eq!(ctx.config.storage.dir, "carts");
        assert_eq!(ctx.storage_dir(), dir.path().join("carts"));
    }

    #[test]
    fn test_storage_dir_is_stable_across_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("rocket.toml"), "").unwrap();
        let nested = dir.path().join("src");
        std::fs::create_dir_all(&nested).unwrap();

        let top = Context::load_from(dir.path(), None, quiet()).unwrap();
        let below = Context::load_from(&nested, None, quiet()).unwrap();

        assert_eq!(top.storage_dir(), dir.path().join(".rocket"));
        assert_eq!(below.storage_dir(), top.storage_dir());
    }

    #[test]
    fn test_absolute_storage_dir_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let elsewhere = tempfile::tempdir().unwrap();
        let config = format!("[storage]\ndir = {:?}\n", elsewhere.path().display().to_string());
        std::fs::write(dir.path().join("rocket.toml"), config).unwrap();

        let ctx = Context::load_from(dir.path(), None, quiet()).unwrap();
        assert_eq!(ctx.storage_dir(), elsewhere.path());
    }

    #[test]
    fn test_explicit_config_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("conf")).unwrap();
        std::fs::write(
            dir.path().join("conf").join("custom.json"),
            r#"{"display": {"currency": "USD"}}"#,
        )
        .unwrap();

        let ctx = Context::load_from(dir.path(), Some("conf/custom.json"), quiet()).unwrap();
        assert_eq!(ctx.config.display.currency, rocket_commerce::Currency::USD);
        assert_eq!(ctx.storage_dir(), dir.path().join("conf").join(".rocket"));

        assert!(Context::load_from(dir.path(), Some("missing.toml"), quiet()).is_err());
    }

    #[test]
    fn test_open_cart_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("rocket.toml"), "").unwrap();

        let ctx = Context::load_from(dir.path(), None, quiet()).unwrap();
        let cart = ctx.open_cart().unwrap();

        assert!(cart.cart().is_empty());
        assert!(ctx.storage_dir().is_dir());
    }
}
