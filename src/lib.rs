pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod paper;
pub mod stats;
pub mod store;

#[cfg(test)]
mod test_fixtures;

pub use error::{PaperTrailError, Result};
pub use paper::Paper;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_NOT_FOUND: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
