//! Module name sets and the per-major-version aggregates.

use std::collections::BTreeSet;

use crate::errors::CoreError;
use crate::version::PythonVersion;

/// Names that never belong in a table even when a scan produces them.
const PLACEHOLDER_NAMES: &[&str] = &["__main__"];

/// A sorted, deduplicated set of importable module names.
///
/// Empty strings and placeholder names are dropped on insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleNames(BTreeSet<String>);

impl ModuleNames {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a name. Returns `false` if it was rejected or already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if name.is_empty() || PLACEHOLDER_NAMES.contains(&name.as_str()) {
            return false;
        }
        self.0.insert(name)
    }

    pub fn union_with(&mut self, other: &Self) {
        self.0.extend(other.0.iter().cloned());
    }

    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        merged.union_with(other);
        merged
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> Extend<S> for ModuleNames {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for name in iter {
            self.insert(name);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for ModuleNames {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut names = Self::new();
        names.extend(iter);
        names
    }
}

/// Running unions of every 2.x and every 3.x release table.
#[derive(Debug, Clone, Default)]
pub struct Aggregates {
    pub py2: ModuleNames,
    pub py3: ModuleNames,
}

impl Aggregates {
    /// Fold one release's names into the matching major-version union.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnsupportedMajor`] for anything but 2.x or 3.x.
    pub fn absorb(&mut self, version: PythonVersion, names: &ModuleNames) -> Result<(), CoreError> {
        match version.major {
            2 => self.py2.union_with(names),
            3 => self.py3.union_with(names),
            major => {
                return Err(CoreError::UnsupportedMajor {
                    major,
                    label: version.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Union of both major versions.
    #[must_use]
    pub fn combined(&self) -> ModuleNames {
        self.py2.union(&self.py3)
    }
}
