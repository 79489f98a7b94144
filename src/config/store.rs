//! Shared, reloadable configuration.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::loader::ConfigError;
use crate::config::types::Config;

/// Cloneable handle on the active [`Config`] and the file it came from.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Snapshot of the active config.
    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Apply an override (e.g. `--api-url`). The change is validated first
    /// and discarded if the result is invalid.
    pub fn update(&self, f: impl FnOnce(&mut Config)) -> Result<(), ConfigError> {
        let mut next = self.get();
        f(&mut next);
        next.validate()?;
        *self.inner.write() = next;
        Ok(())
    }

    /// Re-read the file; the active config is left untouched on error.
    pub fn reload(&self) -> Result<(), ConfigError> {
        let config = Config::load_from(&self.path)?;
        *self.inner.write() = config;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
