//! CLI execution context.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use sevlo_commerce::catalog::Catalog;
use sevlo_commerce::config::StoreConfig;
use tracing::debug;

use crate::output::Output;

/// Config file names searched for in the working directory and its parents.
const CONFIG_NAMES: [&str; 2] = ["sevlo.toml", ".sevlo.toml"];

/// Where the store configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// The configuration compiled into the binary.
    Builtin,
    /// A file on disk.
    File(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Builtin => write!(f, "built-in"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Execution context for CLI commands.
pub struct Context {
    /// Store configuration.
    pub config: StoreConfig,
    /// Validated catalog built from `config`.
    pub catalog: Catalog,
    /// Output handler.
    pub output: Output,
    /// Where `config` was loaded from.
    pub source: ConfigSource,
}

impl Context {
    /// Load the store configuration and build the catalog.
    ///
    /// An explicit path wins; otherwise the nearest `sevlo.toml` up the
    /// directory tree is used, falling back to the built-in store.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let (config, source) = match config_path {
            Some(path) => (load_file(Path::new(path))?, ConfigSource::File(PathBuf::from(path))),
            None => {
                let cwd = std::env::current_dir().context("Failed to get current directory")?;
                match find_config(&cwd) {
                    Some(path) => (load_file(&path)?, ConfigSource::File(path)),
                    None => (
                        StoreConfig::builtin().context("Built-in store configuration is invalid")?,
                        ConfigSource::Builtin,
                    ),
                }
            }
        };

        let catalog = config
            .catalog()
            .with_context(|| format!("Invalid product catalog in {} config", source))?;

        debug!(source = %source, products = catalog.len(), "store loaded");

        Ok(Self {
            config,
            catalog,
            output,
            source,
        })
    }
}

fn load_file(path: &Path) -> Result<StoreConfig> {
    StoreConfig::load(path).with_context(|| format!("Failed to load store config: {}", path.display()))
}

/// Find a config file in the directory tree starting at `start`.
fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
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

    use std::fs;

    fn write_store(path: &Path, brand: &str) {
        let content = format!(
            "[site]\nbrand_name = \"{}\"\n\n[checkout]\nphone = \"555 0100\"\n",
            brand
        );
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        write_store(&dir.path().join("sevlo.toml"), "Root");

        assert_eq!(find_config(&nested), Some(dir.path().join("sevlo.toml")));
    }

    #[test]
    fn test_find_config_prefers_nearest() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("shop");
        fs::create_dir_all(&nested).unwrap();
        write_store(&dir.path().join("sevlo.toml"), "Root");
        write_store(&nested.join(".sevlo.toml"), "Nested");

        assert_eq!(find_config(&nested), Some(nested.join(".sevlo.toml")));
    }

    #[test]
    fn test_find_config_prefers_plain_name_in_same_dir() {
        let dir = tempfile::tempdir().unwrap();
        write_store(&dir.path().join("sevlo.toml"), "Plain");
        write_store(&dir.path().join(".sevlo.toml"), "Hidden");

        assert_eq!(find_config(dir.path()), Some(dir.path().join("sevlo.toml")));
    }

    #[test]
    fn test_load_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.toml");
        write_store(&path, "Tienda");

        let path_str = path.to_str().unwrap();
        let ctx = Context::load(Some(path_str), Output::new(true)).unwrap();
        assert_eq!(ctx.source, ConfigSource::File(path.clone()));
        assert_eq!(ctx.config.site.brand_name, "Tienda");
        assert!(ctx.catalog.is_empty());
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let result = Context::load(Some("/nonexistent/sevlo.toml"), Output::new(true));
        let message = format!("{:#}", result.err().unwrap());
        assert!(message.contains("Failed to load store config"));
    }

    #[test]
    fn test_source_display() {
        assert_eq!(ConfigSource::Builtin.to_string(), "built-in");
        assert_eq!(ConfigSource::File(PathBuf::from("/tmp/sevlo.toml")).to_string(), "/tmp/sevlo.toml");
    }
}
