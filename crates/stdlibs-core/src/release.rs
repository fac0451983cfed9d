//! The embedded table of tracked releases.

use crate::version::PythonVersion;

/// One tracked CPython release and where its source archive lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Release {
    pub version: PythonVersion,
    pub url: &'static str,
}

/// Every release a run regenerates, oldest first.
pub const RELEASES: &[Release] = &[
    release(2, 3, "https://www.python.org/ftp/python/2.3.7/Python-2.3.7.tgz"),
    release(2, 4, "https://www.python.org/ftp/python/2.4.6/Python-2.4.6.tgz"),
    release(2, 5, "https://www.python.org/ftp/python/2.5.6/Python-2.5.6.tgz"),
    release(2, 6, "https://www.python.org/ftp/python/2.6.9/Python-2.6.9.tgz"),
    release(2, 7, "https://www.python.org/ftp/python/2.7.18/Python-2.7.18.tgz"),
    release(3, 0, "https://www.python.org/ftp/python/3.0.1/Python-3.0.1.tgz"),
    release(3, 1, "https://www.python.org/ftp/python/3.1.5/Python-3.1.5.tgz"),
    release(3, 2, "https://www.python.org/ftp/python/3.2.6/Python-3.2.6.tgz"),
    release(3, 3, "https://www.python.org/ftp/python/3.3.7/Python-3.3.7.tgz"),
    release(3, 4, "https://www.python.org/ftp/python/3.4.10/Python-3.4.10.tgz"),
    release(3, 5, "https://www.python.org/ftp/python/3.5.10/Python-3.5.10.tgz"),
    release(3, 6, "https://www.python.org/ftp/python/3.6.13/Python-3.6.13.tgz"),
    release(3, 7, "https://www.python.org/ftp/python/3.7.10/Python-3.7.10.tgz"),
    release(3, 8, "https://www.python.org/ftp/python/3.8.8/Python-3.8.8.tgz"),
    release(3, 9, "https://www.python.org/ftp/python/3.9.2/Python-3.9.2.tgz"),
    release(3, 10, "https://www.python.org/ftp/python/3.10.0/Python-3.10.0a6.tgz"),
];

const fn release(major: u8, minor: u8, url: &'static str) -> Release {
    Release {
        version: PythonVersion::new(major, minor),
        url,
    }
}

impl Release {
    /// File name of the downloaded archive (`Python-3.8.8.tgz`).
    #[must_use]
    pub fn archive_name(&self) -> &'static str {
        self.url.rsplit('/').next().unwrap_or(self.url)
    }

    /// Directory the archive unpacks into (`Python-3.8.8`).
    #[must_use]
    pub fn cache_dir_name(&self) -> &'static str {
        let archive = self.archive_name();
        archive.rsplit_once('.').map_or(archive, |(stem, _)| stem)
    }

    #[must_use]
    pub const fn is_legacy(&self) -> bool {
        self.version.is_legacy()
    }

    /// Name of the per-release generated table (`py38.py`).
    #[must_use]
    pub fn table_file_name(&self) -> String {
        format!("py{}.py", self.version.digits())
    }
}
