//! Build script parsing with grammar-version fallback.

use std::fs;
use std::path::Path;

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::{LanguageExt, SupportLang};
use stdlibs_core::PythonVersion;

use crate::error::ParserError;
use crate::grammar::{KNOWN_GRAMMARS, first_violation};

/// The concrete AST tree type produced by the Python grammar.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// A parsed build script and the newest grammar version it is valid under.
pub struct ParsedScript {
    pub grammar: PythonVersion,
    pub tree: AstTree,
}

impl std::fmt::Debug for ParsedScript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedScript")
            .field("grammar", &self.grammar)
            .finish_non_exhaustive()
    }
}

/// Parse a build script, reading `path` unless `data` is supplied.
///
/// Tries every grammar in [`KNOWN_GRAMMARS`] from newest to oldest and
/// returns the first that accepts the source.
///
/// # Errors
///
/// Returns [`ParserError::Io`] / [`ParserError::Encoding`] if the source
/// cannot be read as UTF-8, or the [`ParserError::Syntax`] raised by the
/// newest grammar when no grammar accepts it.
pub fn try_parse(path: &Path, data: Option<&[u8]>) -> Result<ParsedScript, ParserError> {
    let owned;
    let bytes = match data {
        Some(bytes) => bytes,
        None => {
            owned = fs::read(path).map_err(|source| ParserError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            &owned
        }
    };
    let source = std::str::from_utf8(bytes).map_err(|_| ParserError::Encoding {
        path: path.to_path_buf(),
    })?;
    let script = try_parse_str(source)?;
    tracing::debug!(path = %path.display(), grammar = %script.grammar, "parsed build script");
    Ok(script)
}

/// [`try_parse`] for source already in memory.
///
/// # Errors
///
/// Returns the [`ParserError::Syntax`] from the newest grammar attempted
/// when no known grammar accepts `source`.
pub fn try_parse_str(source: &str) -> Result<ParsedScript, ParserError> {
    let tree = SupportLang::Python.ast_grep(source);
    let mut newest_error = None;

    for &grammar in KNOWN_GRAMMARS {
        let violation = first_violation(&tree.root(), grammar);
        match violation {
            None => return Ok(ParsedScript { grammar, tree }),
            Some(violation) => {
                tracing::trace!(
                    %grammar,
                    line = violation.line,
                    reason = %violation.reason,
                    "grammar rejected"
                );
                newest_error.get_or_insert(ParserError::Syntax {
                    grammar: grammar.to_string(),
                    line: violation.line,
                    reason: violation.reason,
                });
            }
        }
    }

    Err(newest_error.unwrap_or_else(|| ParserError::Syntax {
        grammar: String::new(),
        line: 0,
        reason: "no known grammar versions".to_string(),
    }))
}
