//! Cross-cutting error types for stdlibs.
//!
//! Component errors (`FetchError`, `ParserError`, `ScanError`) live in their
//! own crates; they converge into `anyhow` in `stdlibs-cli`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the core types and the table writer.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Only major versions 2 and 3 have aggregate tables.
    #[error("Unsupported major version {major} in release {label}")]
    UnsupportedMajor { major: u8, label: String },

    /// Writing a generated table failed.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
