//! Generated file template settings.

use serde::{Deserialize, Serialize};

fn default_header() -> String {
    "# Copyright 2021 The stdlibs Authors\n# Licensed under the MIT license\n".to_string()
}

fn default_generator() -> String {
    "stdlibs-gen".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Comment block placed at the top of every generated table.
    #[serde(default = "default_header")]
    pub header: String,

    /// Name shown in the `# Generated by` marker.
    #[serde(default = "default_generator")]
    pub generator: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            header: default_header(),
            generator: default_generator(),
        }
    }
}
