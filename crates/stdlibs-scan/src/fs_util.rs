use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ScanError;

/// Entries of `dir`, sorted by path; a missing directory has none.
pub(crate) fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut entries = fs::read_dir(dir)
        .map_err(ScanError::io(dir))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(ScanError::io(dir))?;
    entries.sort();
    Ok(entries)
}

/// Read `path` as UTF-8, falling back to Latin-1.
pub(crate) fn read_source_text(path: &Path) -> Result<String, ScanError> {
    let bytes = fs::read(path).map_err(ScanError::io(path))?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => err.into_bytes().into_iter().map(char::from).collect(),
    })
}

pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn latin1_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.c");
        fs::write(&path, b"/* caf\xe9 */").unwrap();
        assert_eq!(read_source_text(&path).unwrap(), "/* caf\u{e9} */");
    }

    #[test]
    fn missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(sorted_entries(&dir.path().join("nope")).unwrap().is_empty());
    }
}
