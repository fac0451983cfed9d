//! Generated table rendering and atomic writes.
//!
//! A table is a Python module holding one `frozenset` literal:
//!
//! ```text
//! # Copyright ...
//!
//! # Generated by stdlibs-gen
//!
//! module_names = frozenset(
//!     [
//!         "abc",
//!     ]
//! )
//! ```

use std::fmt::Write as _;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use crate::errors::CoreError;
use crate::names::ModuleNames;

/// The fixed parts of every generated file.
#[derive(Debug, Clone, Copy)]
pub struct TableTemplate<'a> {
    /// Comment lines placed at the top of the file, newline-terminated.
    pub header: &'a str,
    /// Name shown in the `# Generated by` marker.
    pub generator: &'a str,
}

/// Render `names` into the generated-file template.
#[must_use]
pub fn render_table(template: TableTemplate<'_>, names: &ModuleNames) -> String {
    let mut out = String::with_capacity(64 + names.len() * 24);
    out.push_str(template.header);
    if !template.header.is_empty() && !template.header.ends_with('\n') {
        out.push('\n');
    }
    let _ = write!(
        out,
        "\n# Generated by {}\n\nmodule_names = frozenset(\n    [\n",
        template.generator
    );
    for name in names.iter() {
        let _ = writeln!(out, "        \"{name}\",");
    }
    out.push_str("    ]\n)\n");
    out
}

/// Atomically write `contents` to `dir/file_name`, creating `dir` if needed.
///
/// The data goes to a temporary file in `dir` which is then renamed over the
/// target, so readers never observe a half-written table.
///
/// # Errors
///
/// Returns [`CoreError::Write`] if the directory, temp file, or rename fails.
pub fn write_table(dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf, CoreError> {
    let path = dir.join(file_name);
    let wrap = |source| CoreError::Write {
        path: path.clone(),
        source,
    };

    fs::create_dir_all(dir).map_err(wrap)?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(wrap)?;
    tmp.write_all(contents.as_bytes()).map_err(wrap)?;
    tmp.persist(&path).map_err(|e| wrap(e.error))?;

    tracing::debug!(path = %path.display(), "wrote table");
    Ok(path)
}
