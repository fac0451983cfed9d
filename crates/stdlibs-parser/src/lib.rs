//! # stdlibs-parser
//!
//! ast-grep-based parsing of CPython `setup.py` build scripts.
//!
//! - [`try_parse`] parses once with the tree-sitter Python grammar and then
//!   picks the newest known grammar version the tree is valid under.
//! - [`extract_extension_names`] walks the tree for `Extension("name", ...)`
//!   style constructor calls and `CARBON_EXTS = [...]` style list
//!   assignments.

mod error;
mod extension;
mod grammar;
mod literal;
mod parser;

pub use error::ParserError;
pub use extension::{EXTENSION_PATTERNS, ExtensionPatterns, extract_extension_names, extract_with};
pub use grammar::KNOWN_GRAMMARS;
pub use literal::evaluate_string_literal;
pub use parser::{AstTree, ParsedScript, try_parse, try_parse_str};
