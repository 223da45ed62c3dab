use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{PaperTrailError, Result};
use crate::output::svg::{DEFAULT_TOP_AUTHORS, DEFAULT_TOP_TAGS};

/// Directory under the profile repository holding the paper log.
pub const DATA_DIR: &str = "data";
/// File name of the paper log.
pub const PAPERS_FILE: &str = "papers.json";
/// Directory under the profile repository receiving generated charts.
pub const IMAGES_DIR: &str = "images";

/// User configuration stored in `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// GitHub account owning the profile repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_username: Option<String>,

    /// Local checkout of the profile repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_repo_path: Option<PathBuf>,

    /// Tags shown in the tag cloud (default: 12).
    #[serde(default = "default_tag_limit")]
    pub tag_limit: usize,

    /// Authors shown in the top-authors chart (default: 8).
    #[serde(default = "default_author_limit")]
    pub author_limit: usize,
}

const fn default_tag_limit() -> usize {
    DEFAULT_TOP_TAGS
}

const fn default_author_limit() -> usize {
    DEFAULT_TOP_AUTHORS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_username: None,
            profile_repo_path: None,
            tag_limit: default_tag_limit(),
            author_limit: default_author_limit(),
        }
    }
}

impl Config {
    /// Profile repository path, required by every command touching the log.
    ///
    /// # Errors
    /// Returns a configuration error when `profile_repo_path` is unset.
    pub fn repo_path(&self) -> Result<&PathBuf> {
        self.profile_repo_path.as_ref().ok_or_else(|| {
            PaperTrailError::Config(
                "profile_repo_path is not set. Run `papertrail init --repo <path>` first."
                    .to_string(),
            )
        })
    }

    /// `<repo>/data/papers.json`.
    ///
    /// # Errors
    /// Returns a configuration error when `profile_repo_path` is unset.
    pub fn papers_path(&self) -> Result<PathBuf> {
        Ok(self.repo_path()?.join(DATA_DIR).join(PAPERS_FILE))
    }

    /// `<repo>/images`.
    ///
    /// # Errors
    /// Returns a configuration error when `profile_repo_path` is unset.
    pub fn images_dir(&self) -> Result<PathBuf> {
        Ok(self.repo_path()?.join(IMAGES_DIR))
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
