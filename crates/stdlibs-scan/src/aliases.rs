//! Frozen bootstrap modules that appear in no source scan.

use stdlibs_core::PythonVersion;

/// `(first version, module)` pairs.
pub const BOOTSTRAP_ALIASES: &[(PythonVersion, &str)] = &[
    (PythonVersion::new(3, 3), "_frozen_importlib"),
    (PythonVersion::new(3, 5), "_frozen_importlib_external"),
];

/// Aliases present in `version`.
pub fn bootstrap_aliases(version: PythonVersion) -> impl Iterator<Item = &'static str> {
    BOOTSTRAP_ALIASES
        .iter()
        .filter(move |(since, _)| version >= *since)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(PythonVersion::new(2, 7), &[])]
    #[case(PythonVersion::new(3, 2), &[])]
    #[case(PythonVersion::new(3, 3), &["_frozen_importlib"])]
    #[case(PythonVersion::new(3, 4), &["_frozen_importlib"])]
    #[case(
        PythonVersion::new(3, 5),
        &["_frozen_importlib", "_frozen_importlib_external"]
    )]
    #[case(
        PythonVersion::new(3, 10),
        &["_frozen_importlib", "_frozen_importlib_external"]
    )]
    fn aliases_by_version(#[case] version: PythonVersion, #[case] expected: &[&str]) {
        assert_eq!(bootstrap_aliases(version).collect::<Vec<_>>(), expected);
    }
}
