//! JSON persistence for the paper log.
//!
//! The log is a single pretty-printed JSON array. Records keep their file
//! order; every consumer sorts or aggregates on its own.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PaperTrailError, Result};
use crate::paper::Paper;

/// Empty log written when the file does not exist yet.
const EMPTY_LOG: &str = "[]\n";

/// A `papers.json` file on disk.
#[derive(Debug, Clone)]
pub struct PaperStore {
    path: PathBuf,
}

impl PaperStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every record. A missing file is created as an empty log.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or created, or if any
    /// record is malformed (including an invalid `date_read`).
    pub fn load(&self) -> Result<Vec<Paper>> {
        if !self.path.exists() {
            log::info!("Creating empty paper log at {}", self.path.display());
            self.write_raw(EMPTY_LOG)?;
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| self.access_error(source))?;
        let papers: Vec<Paper> = serde_json::from_str(&content)?;
        log::debug!("Loaded {} papers from {}", papers.len(), self.path.display());
        Ok(papers)
    }

    /// Replace the log with `papers`.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, papers: &[Paper]) -> Result<()> {
        let mut json = serde_json::to_string_pretty(papers)?;
        json.push('\n');
        self.write_raw(&json)?;
        log::debug!("Saved {} papers to {}", papers.len(), self.path.display());
        Ok(())
    }

    /// Append a record and return the updated log.
    ///
    /// # Errors
    /// Returns an error if the log cannot be loaded or saved.
    pub fn add(&self, paper: Paper) -> Result<Vec<Paper>> {
        let mut papers = self.load()?;
        log::info!("Adding paper {} ({})", paper.id, paper.title);
        papers.push(paper);
        self.save(&papers)?;
        Ok(papers)
    }

    /// Remove the record with `id` and return it.
    ///
    /// # Errors
    /// Returns `PaperNotFound` if no record has that id, or an I/O error.
    pub fn remove(&self, id: &str) -> Result<Paper> {
        let mut papers = self.load()?;
        let index = papers
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| PaperTrailError::PaperNotFound(id.to_string()))?;
        let removed = papers.remove(index);
        self.save(&papers)?;
        log::info!("Removed paper {id}");
        Ok(removed)
    }

    /// Look up a record by id.
    ///
    /// # Errors
    /// Returns an error if the log cannot be loaded.
    pub fn find(&self, id: &str) -> Result<Option<Paper>> {
        Ok(self.load()?.into_iter().find(|p| p.id == id))
    }

    fn write_raw(&self, content: &str) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| self.access_error(source))?;
        }
        fs::write(&self.path, content).map_err(|source| self.access_error(source))
    }

    fn access_error(&self, source: std::io::Error) -> PaperTrailError {
        PaperTrailError::FileAccess {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
