//! `major.minor` release versions.

use std::fmt;

/// A CPython `major.minor` version, ordered numerically (`3.10 > 3.9`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PythonVersion {
    pub major: u8,
    pub minor: u8,
}

impl PythonVersion {
    #[must_use]
    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }

    /// 2.x releases need their build script migrated before parsing.
    #[must_use]
    pub const fn is_legacy(self) -> bool {
        self.major == 2
    }

    /// Concatenated digits, as used in generated file names (`3.10` -> `310`).
    #[must_use]
    pub fn digits(self) -> String {
        format!("{}{}", self.major, self.minor)
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
