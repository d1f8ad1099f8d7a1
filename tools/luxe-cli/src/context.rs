//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use luxe_cache::FileStore;
use luxe_commerce::seed;
use luxe_commerce::storefront::Storefront;
use luxe_stylist::GeminiStylist;

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };

        Ok(Self {
            config,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<CliConfig> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Path of the state file holding persisted lists.
    pub fn state_path(&self) -> PathBuf {
        self.resolve_path(&self.config.storage.resolved_path())
    }

    /// Open the storefront over the seed catalog and the state file.
    pub fn storefront(&self) -> Result<Storefront<FileStore>> {
        let path = self.state_path();
        self.output
            .debug(&format!("Using state file {}", path.display()));
        let store = FileStore::open(&path)
            .with_context(|| format!("Failed to open state file: {}", path.display()))?;
        Ok(Storefront::open(store, seed::catalog()))
    }

    /// Build the Gemini stylist from config and environment.
    pub fn stylist(&self) -> Result<GeminiStylist> {
        let stylist_config = &self.config.stylist;
        let mut stylist = GeminiStylist::from_env_var(&stylist_config.api_key_env)
            .context("Stylist is unavailable")?
            .with_model(&stylist_config.model);
        if let Some(base_url) = &stylist_config.base_url {
            stylist = stylist.with_base_url(base_url);
        }
        Ok(stylist)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}
