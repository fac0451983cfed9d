//! # stdlibs-scan
//!
//! Module names found by scanning an extracted release tree, as opposed to
//! the ones declared in its build script:
//!
//! - pure-Python modules and packages under `Lib/` ([`scan_library`])
//! - built-in C modules under `Python/`, `Modules/`, `PC/` ([`scan_native_sources`])
//! - Windows inittab tables ([`scan_inittab`])
//! - frozen bootstrap modules by version ([`bootstrap_aliases`])

pub mod aliases;
pub mod error;
mod fs_util;
pub mod inittab;
pub mod library;
pub mod native;

use std::path::Path;

use stdlibs_core::{ModuleNames, PythonVersion};

pub use aliases::{BOOTSTRAP_ALIASES, bootstrap_aliases};
pub use error::ScanError;
pub use inittab::{INITTAB_SOURCES, inittab_names, scan_inittab};
pub use library::scan_library;
pub use native::{
    FILENAME_OVERRIDES, MODULE_SUFFIX_FILES, NATIVE_SOURCE_DIRS, NativeModule,
    module_name_for_source, scan_native_sources,
};

/// Every module name the source tree at `root` provides for `version`.
///
/// # Errors
///
/// Returns [`ScanError::Io`] if a scanned directory or file cannot be read.
pub fn collect_source_names(root: &Path, version: PythonVersion) -> Result<ModuleNames, ScanError> {
    let mut names = ModuleNames::default();
    names.extend(scan_library(&root.join("Lib"))?);
    names.extend(scan_native_sources(root)?);
    names.extend(scan_inittab(root)?);
    names.extend(bootstrap_aliases(version));
    tracing::info!(%version, count = names.len(), "collected source names");
    Ok(names)
}
