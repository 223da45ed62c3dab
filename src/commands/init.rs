use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, InitArgs};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::store::PaperStore;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, PaperTrailError, Result};

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args, cli.config.as_deref()) {
        Ok(path) => {
            if !cli.quiet {
                println!("Created configuration file: {}", path.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Write the user config and lay out `data/` and `images/` in the repository.
///
/// Returns the path of the written config file.
///
/// # Errors
/// Returns an error if a config already exists (without --force) or if any
/// directory or file cannot be written.
pub fn run_init_impl(args: &InitArgs, config_path: Option<&Path>) -> Result<PathBuf> {
    let loader = FileConfigLoader::new().with_path(config_path.map(Path::to_path_buf));
    let target = loader.config_path()?;

    // Keep unrelated settings (limits) when re-initialising with --force.
    let existing = if target.exists() {
        if !args.force {
            return Err(PaperTrailError::Config(format!(
                "Configuration file already exists: {}. Use --force to overwrite.",
                target.display()
            )));
        }
        loader.load()?
    } else {
        Config::default()
    };

    let repo = std::path::absolute(&args.repo).map_err(|source| PaperTrailError::FileAccess {
        path: args.repo.clone(),
        source,
    })?;

    let config = Config {
        github_username: args.username.clone().or(existing.github_username),
        profile_repo_path: Some(repo),
        ..existing
    };

    let images = config.images_dir()?;
    fs::create_dir_all(&images).map_err(|source| PaperTrailError::FileAccess {
        path: images.clone(),
        source,
    })?;
    // Creates data/papers.json as an empty log when missing.
    let store = PaperStore::new(config.papers_path()?);
    let papers = store.load()?;
    log::info!("{} holds {} papers", store.path().display(), papers.len());

    loader.save(&config)
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
