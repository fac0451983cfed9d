//! Cache and output locations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_cache_dir() -> PathBuf {
    PathBuf::from(".cache")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("stdlibs")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    /// Where archives are downloaded and unpacked. Reused across runs.
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,

    /// Where generated tables are written.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            cache_dir: default_cache_dir(),
            output_dir: default_output_dir(),
        }
    }
}
