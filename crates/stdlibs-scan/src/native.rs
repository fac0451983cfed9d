//! Built-in C modules under `Python/`, `Modules/` and `PC/`.
//!
//! A source file declares its module either through a `PyModuleDef`
//! initializer (3.x) or a `Py_InitModule*` call (2.x). When the declared
//! name is not a string literal the file name decides, via
//! [`FILENAME_OVERRIDES`] and [`MODULE_SUFFIX_FILES`].

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ScanError;
use crate::fs_util::{file_name, read_source_text, sorted_entries};

/// Directories holding built-in module sources, relative to the release root.
pub const NATIVE_SOURCE_DIRS: &[&str] = &["Python", "Modules", "PC"];

/// Files whose module name is not a literal, mapped to the real name.
pub const FILENAME_OVERRIDES: &[(&str, &str)] = &[
    ("_warnings.c", "_warnings"),
    ("_sre.c", "_sre"),
    ("pyexpat.c", "pyexpat"),
    ("_bsddb.c", "_bsddb"),
];

/// Files named `<name>module.c` whose module is `<name>`.
pub const MODULE_SUFFIX_FILES: &[&str] = &["socketmodule.c", "posixmodule.c"];

static MODULE_DEF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"PyModuleDef .*? = \{\s*[^,]*,\s*([^,}]+)[,}]").expect("valid regex")
});

static INIT_MODULE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r".Py_InitModule\d?\(\s*((?:[^)\n].*?)??),").expect("valid regex")
});

static INLINE_COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\*.*?\*/").expect("valid regex"));

/// What a C source file says about the module it defines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeModule {
    Named(String),
    /// A declaration whose name expression could not be resolved.
    Unresolved(String),
    NoDeclaration,
}

/// Scan every `*.c` file directly under the native source directories.
///
/// Unresolved declarations are logged and skipped.
///
/// # Errors
///
/// Returns [`ScanError::Io`] if a directory or source file cannot be read.
pub fn scan_native_sources(root: &Path) -> Result<Vec<String>, ScanError> {
    let mut names = Vec::new();
    for dir in NATIVE_SOURCE_DIRS {
        for path in sorted_entries(&root.join(dir))? {
            let name = file_name(&path);
            if !name.ends_with(".c") || !path.is_file() {
                continue;
            }
            let text = read_source_text(&path)?;
            match module_name_for_source(&name, &text) {
                NativeModule::Named(module) => {
                    tracing::debug!(file = %path.display(), %module, "native module");
                    names.push(module);
                }
                NativeModule::Unresolved(expr) => {
                    tracing::warn!(file = %path.display(), %expr, "cannot resolve module name");
                }
                NativeModule::NoDeclaration => {}
            }
        }
    }
    Ok(names)
}

/// Resolve the module declared by `text`, the contents of `file_name`.
#[must_use]
pub fn module_name_for_source(file_name: &str, text: &str) -> NativeModule {
    let Some(expr) = declared_name_expr(text) else {
        return NativeModule::NoDeclaration;
    };

    if expr.starts_with('"') && expr.ends_with('"') {
        return NativeModule::Named(expr.trim_matches('"').to_string());
    }
    if let Some((_, name)) = FILENAME_OVERRIDES.iter().find(|(file, _)| *file == file_name) {
        return NativeModule::Named((*name).to_string());
    }
    if MODULE_SUFFIX_FILES.contains(&file_name) {
        if let Some((name, _)) = file_name.split_once("module") {
            return NativeModule::Named(name.to_string());
        }
    }
    NativeModule::Unresolved(expr)
}

fn declared_name_expr(text: &str) -> Option<String> {
    let captured = MODULE_DEF_RE
        .captures(text)
        .or_else(|| INIT_MODULE_RE.captures(text))?
        .get(1)?
        .as_str();

    let cleaned = INLINE_COMMENT_RE.replace_all(captured, "");
    let mut expr = cleaned.trim();
    if expr.starts_with(".m_name") {
        if let Some((_, value)) = expr.split_once('=') {
            expr = value.trim();
        }
    }
    Some(expr.to_string())
}
