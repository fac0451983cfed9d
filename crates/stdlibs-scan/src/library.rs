//! Pure-Python modules and packages under `Lib/`.

use std::path::Path;

use crate::error::ScanError;
use crate::fs_util::{file_name, sorted_entries};

const EXCLUDED_ENTRIES: &[&str] = &["__pycache__", "site-packages", "test"];
const SUPPORT_DIR_PREFIXES: &[&str] = &["plat-", "lib-"];

/// Names importable from `lib_dir`, in directory order.
///
/// Platform (`plat-*`) and library (`lib-*`) support directories are
/// flattened one level: their packages and `.py` modules are top-level
/// names at runtime.
///
/// # Errors
///
/// Returns [`ScanError::Io`] if a directory cannot be listed.
pub fn scan_library(lib_dir: &Path) -> Result<Vec<String>, ScanError> {
    let mut names = Vec::new();
    for path in sorted_entries(lib_dir)? {
        let name = file_name(&path);
        let is_support_dir =
            path.is_dir() && SUPPORT_DIR_PREFIXES.iter().any(|p| name.starts_with(p));

        if is_support_dir {
            names.extend(support_dir_names(&path)?);
        } else if !EXCLUDED_ENTRIES.contains(&name.as_str()) {
            names.push(module_name(&name).to_string());
        }
    }
    tracing::debug!(dir = %lib_dir.display(), count = names.len(), "library scan");
    Ok(names)
}

fn support_dir_names(dir: &Path) -> Result<Vec<String>, ScanError> {
    let mut names = Vec::new();
    for path in sorted_entries(dir)? {
        let name = file_name(&path);
        if path.is_dir() {
            if !name.starts_with("lib-") {
                names.push(name);
            }
        } else if let Some(stem) = name.strip_suffix(".py") {
            names.push(stem.to_string());
        }
    }
    Ok(names)
}

/// `json` -> `json`, `os.py` -> `os`, `_foo.cpython.so` -> `_foo`.
fn module_name(entry: &str) -> &str {
    entry.split('.').next().unwrap_or(entry)
}
