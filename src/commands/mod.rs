pub mod add;
pub mod generate;
pub mod init;
pub mod list;
pub mod remove;
pub mod stats;

use std::path::Path;

use chrono::NaiveDate;

pub use add::{run_add, run_add_impl};
pub use generate::{run_generate, run_generate_impl};
pub use init::{run_init, run_init_impl};
pub use list::{ListFilter, filter_papers, run_list, run_list_impl, run_search, run_search_impl};
pub use remove::{run_remove, run_remove_impl};
pub use stats::{run_stats, run_stats_impl};

use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::Result;

/// Load the user config, honouring the global `--config` flag.
///
/// # Errors
/// Returns an error if the config file exists but cannot be read or parsed.
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    FileConfigLoader::new()
        .with_path(config_path.map(Path::to_path_buf))
        .load()
}

/// Current local date, used when no explicit date is given.
#[must_use]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
