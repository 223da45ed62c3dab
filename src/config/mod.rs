mod filesystem;
mod loader;
mod model;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader};
pub use model::{Config, DATA_DIR, IMAGES_DIR, PAPERS_FILE};
