//! Filesystem abstraction for testability.

use std::path::{Path, PathBuf};

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Write `content` to `path`, creating parent directories.
    ///
    /// # Errors
    /// Returns an error if a directory or the file cannot be written.
    fn write(&self, path: &Path, content: &str) -> std::io::Result<()>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Get the platform-specific configuration directory for papertrail.
    ///
    /// - Windows: `%APPDATA%\papertrail\config`
    /// - macOS: `~/Library/Application Support/papertrail`
    /// - Linux: `~/.config/papertrail` (XDG)
    fn config_dir(&self) -> Option<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> std::io::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "papertrail")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}
