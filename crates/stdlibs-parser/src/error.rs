//! Parser error types for stdlibs-parser.

use std::path::PathBuf;

/// Errors that can occur while reading and parsing a build script.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Syntax error under Python {grammar} grammar at line {line}: {reason}")]
    Syntax {
        grammar: String,
        line: usize,
        reason: String,
    },

    #[error("{} is not valid UTF-8", path.display())]
    Encoding { path: PathBuf },

    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
