use std::{
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock},
};

use crate::{Config, Result};

/// Shared bot state handed to every command.
///
/// Converters take one [`Config`] snapshot per resolution; a reload only
/// affects invocations that start after it.
#[derive(Clone, Debug)]
pub struct State {
    config: Arc<RwLock<Arc<Config>>>,
    config_path: Option<PathBuf>,
}

impl State {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(Arc::new(config))),
            config_path: None,
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = Config::load(path)?;

        Ok(Self {
            config: Arc::new(RwLock::new(Arc::new(config))),
            config_path: Some(path.to_path_buf()),
        })
    }

    pub fn config(&self) -> Arc<Config> {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_config(&self, config: Config) {
        *self.config.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(config);
    }

    /// Re-reads the config file this state was loaded from. The current
    /// config is kept when the file can't be read or parsed.
    pub fn reload_config(&self) -> Result<()> {
        let Some(path) = &self.config_path else {
            log::debug!("No config file to reload");
            return Ok(());
        };

        let config = Config::load(path).inspect_err(|e| {
            log::warn!("Failed to reload {}: {e}", path.display());
        })?;

        self.set_config(config);
        log::info!("Reloaded config from {}", path.display());

        Ok(())
    }
}
