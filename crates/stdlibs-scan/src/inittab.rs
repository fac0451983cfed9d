//! Windows builds register built-ins in a static `_PyImport_Inittab` table.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ScanError;
use crate::fs_util::read_source_text;

/// Config sources holding an inittab, relative to the release root.
pub const INITTAB_SOURCES: &[&str] = &["PC/config.c", "PC/os2vacpp/config.c"];

const INITTAB_MARKER: &str = "_PyImport_Inittab[] = {";

static INITTAB_ENTRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\{"([^"]+)", \S+?\}"#).expect("valid regex"));

/// Names registered by every inittab source present under `root`.
///
/// # Errors
///
/// Returns [`ScanError::Io`] if a present source cannot be read.
pub fn scan_inittab(root: &Path) -> Result<Vec<String>, ScanError> {
    let mut names = Vec::new();
    for source in INITTAB_SOURCES {
        let path = root.join(source);
        if !path.is_file() {
            continue;
        }
        let text = read_source_text(&path)?;
        match inittab_names(&text) {
            Some(found) => {
                tracing::debug!(file = %path.display(), count = found.len(), "inittab");
                names.extend(found);
            }
            None => tracing::warn!(file = %path.display(), "no inittab table, skipping"),
        }
    }
    Ok(names)
}

/// Entries of the first inittab table in `text`, or `None` without one.
#[must_use]
pub fn inittab_names(text: &str) -> Option<Vec<String>> {
    let (_, rest) = text.split_once(INITTAB_MARKER)?;
    let table = rest.split(INITTAB_MARKER).next().unwrap_or(rest);
    Some(
        INITTAB_ENTRY_RE
            .captures_iter(table)
            .map(|caps| caps[1].to_string())
            .filter(|name| name != "__main__")
            .collect(),
    )
}
