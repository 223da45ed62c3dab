use std::fs;
use std::path::{Path, PathBuf};

use chrono::Datelike;

use crate::cli::{Cli, GenerateArgs};
use crate::config::Config;
use crate::output::{ChartKind, RenderOptions, render_charts};
use crate::store::PaperStore;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, PaperTrailError, Result};

use super::{load_config, today};

#[must_use]
pub fn run_generate(args: &GenerateArgs, cli: &Cli) -> i32 {
    match run_generate_impl(args, cli.config.as_deref()) {
        Ok(written) => {
            if !cli.quiet {
                for path in &written {
                    println!("Wrote {}", path.display());
                }
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Render the requested charts and write one `<name>.svg` per chart.
///
/// Returns the written paths in chart order.
///
/// # Errors
/// Returns an error if the paper log cannot be loaded, if the input or output
/// location cannot be resolved, or if a file cannot be written.
pub fn run_generate_impl(args: &GenerateArgs, config_path: Option<&Path>) -> Result<Vec<PathBuf>> {
    let config = load_config(config_path)?;
    let input = resolve(args.input.as_ref(), || config.papers_path())?;
    let out_dir = resolve(args.out_dir.as_ref(), || config.images_dir())?;

    let papers = PaperStore::new(&input).load()?;
    let options = render_options(args, &config);
    let kinds = selected_kinds(&args.only);
    log::info!(
        "Rendering {} charts for {} papers (year {}, as of {})",
        kinds.len(),
        papers.len(),
        options.year,
        options.as_of
    );

    fs::create_dir_all(&out_dir).map_err(|source| PaperTrailError::FileAccess {
        path: out_dir.clone(),
        source,
    })?;

    render_charts(&kinds, &papers, &options)
        .into_iter()
        .map(|(kind, svg)| -> Result<PathBuf> {
            let path = out_dir.join(kind.file_name());
            fs::write(&path, svg).map_err(|source| PaperTrailError::FileAccess {
                path: path.clone(),
                source,
            })?;
            log::debug!("Wrote {}", path.display());
            Ok(path)
        })
        .collect()
}

fn resolve(
    explicit: Option<&PathBuf>,
    from_config: impl FnOnce() -> Result<PathBuf>,
) -> Result<PathBuf> {
    explicit.map_or_else(from_config, |path| Ok(path.clone()))
}

fn render_options(args: &GenerateArgs, config: &Config) -> RenderOptions {
    let as_of = args.as_of.unwrap_or_else(today);
    RenderOptions::new(as_of)
        .with_year(args.year.unwrap_or_else(|| as_of.year()))
        .with_limits(config.tag_limit, config.author_limit)
}

/// Requested charts in canonical order, or all of them.
fn selected_kinds(only: &[ChartKind]) -> Vec<ChartKind> {
    if only.is_empty() {
        return ChartKind::ALL.to_vec();
    }
    ChartKind::ALL
        .into_iter()
        .filter(|kind| only.contains(kind))
        .collect()
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;
