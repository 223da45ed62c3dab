use std::path::{Path, PathBuf};

use crate::error::{PaperTrailError, Result};

use super::Config;
use super::filesystem::{FileSystem, RealFileSystem};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

/// Loads and saves `config.toml`.
///
/// The file lives in the platform config directory unless an explicit path
/// is given (the global `--config` flag). A missing file yields defaults.
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
    explicit_path: Option<PathBuf>,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fs: RealFileSystem,
            explicit_path: None,
        }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self {
            fs,
            explicit_path: None,
        }
    }

    /// Use `path` instead of the platform location.
    #[must_use]
    pub fn with_path(mut self, path: Option<PathBuf>) -> Self {
        self.explicit_path = path;
        self
    }

    /// Resolved location of `config.toml`.
    ///
    /// # Errors
    /// Returns a configuration error when no explicit path is set and the
    /// platform config directory cannot be determined.
    pub fn config_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.explicit_path {
            return Ok(path.clone());
        }
        self.fs
            .config_dir()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .ok_or_else(|| {
                PaperTrailError::Config("Could not determine the config directory".to_string())
            })
    }

    /// Write `config` to the resolved location and return that path.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, config: &Config) -> Result<PathBuf> {
        let path = self.config_path()?;
        let content = toml::to_string_pretty(config)?;
        self.fs
            .write(&path, &content)
            .map_err(|source| PaperTrailError::FileAccess {
                path: path.clone(),
                source,
            })?;
        log::info!("Wrote config to {}", path.display());
        Ok(path)
    }

    fn parse_config(content: &str) -> Result<Config> {
        Ok(toml::from_str(content)?)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<Config> {
        let path = self.config_path()?;
        if !self.fs.exists(&path) {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        self.load_from_path(&path)
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        let content =
            self.fs
                .read_to_string(path)
                .map_err(|source| PaperTrailError::FileAccess {
                    path: path.to_path_buf(),
                    source,
                })?;
        log::debug!("Loading config from {}", path.display());
        Self::parse_config(&content)
    }
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
