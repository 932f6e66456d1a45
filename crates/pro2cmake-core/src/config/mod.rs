//! Conversion file loading
//!
//! The conversion file (`pro2cmake.toml`) carries the assignments of a
//! project in structured form plus the value normalization rules.

pub mod parser;
pub mod schema;

use std::path::{Path, PathBuf};

pub use parser::{parse_config, parse_config_str, to_toml};
pub use schema::{Assignment, ConversionConfig};

/// Default conversion file name
pub const CONFIG_FILE_NAME: &str = "pro2cmake.toml";

/// Resolve the conversion file: an explicit path wins, otherwise the default
/// file name in `project_root`.
pub fn config_path(explicit: Option<&Path>, project_root: &Path) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => project_root.join(CONFIG_FILE_NAME),
    }
}
