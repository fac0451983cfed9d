//! External programs invoked during a run.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_download() -> Vec<String> {
    vec!["wget".to_string(), "-c".to_string()]
}

fn default_extract() -> Vec<String> {
    vec!["tar".to_string(), "-xvzf".to_string()]
}

fn default_python() -> String {
    "python3".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToolsConfig {
    /// Download command; the archive URL is appended.
    #[serde(default = "default_download")]
    pub download: Vec<String>,

    /// Extraction command; the archive file name is appended.
    #[serde(default = "default_extract")]
    pub extract: Vec<String>,

    /// Interpreter that still ships `lib2to3` (removed in 3.13).
    #[serde(default = "default_python")]
    pub python: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            download: default_download(),
            extract: default_extract(),
            python: default_python(),
        }
    }
}

impl ToolsConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (field, command) in [
            ("tools.download", &self.download),
            ("tools.extract", &self.extract),
        ] {
            if command.first().is_none_or(|program| program.trim().is_empty()) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: "command must name a program".to_string(),
                });
            }
        }
        if self.python.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "tools.python".to_string(),
                reason: "interpreter path is empty".to_string(),
            });
        }
        Ok(())
    }
}
