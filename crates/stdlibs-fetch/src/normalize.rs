//! `lib2to3` migration of 2.x build scripts.
//!
//! The migrated script lands in `<root>/fixed/setup.py`. Migration only runs
//! right after extraction; later runs reuse whatever `fixed/` holds. If the
//! migration fails after a successful extraction the cache is left without a
//! `fixed/setup.py` and nothing marks it as incomplete, so the next run fails
//! while parsing. Delete the release directory under the cache to recover.

use std::fs;
use std::path::PathBuf;

use stdlibs_core::Release;

use crate::archive::FetchedRelease;
use crate::error::FetchError;
use crate::runner::{CommandRunner, CommandSpec};

const BUILD_SCRIPT: &str = "setup.py";
const MIGRATED_DIR: &str = "fixed";

/// Lines `lib2to3` emits that still do not parse, compared after trimming.
pub const MIGRATION_DENYLIST: &[&str] = &[
    "join(F, fw + '.framework', H)",
    "for fw in 'Tcl', 'Tk'",
    "for fw in ('Tcl', 'Tk')",
    "for H in 'Headers', 'Versions/Current/PrivateHeaders'",
];

/// Return the build script to parse for `release`, migrating it if needed.
///
/// # Errors
///
/// Returns [`FetchError`] if the migration command fails or the migrated
/// script cannot be read back and rewritten.
pub fn prepare_build_script(
    release: &Release,
    fetched: &FetchedRelease,
    python: &str,
    runner: &dyn CommandRunner,
) -> Result<PathBuf, FetchError> {
    let original = fetched.root.join(BUILD_SCRIPT);
    if !release.is_legacy() {
        return Ok(original);
    }

    let fixed_dir = fetched.root.join(MIGRATED_DIR);
    let migrated = fixed_dir.join(BUILD_SCRIPT);
    if !fetched.freshly_extracted {
        return Ok(migrated);
    }

    fs::create_dir_all(&fixed_dir).map_err(FetchError::io(&fixed_dir))?;
    // The child runs inside the release root; a relative cache dir must not
    // be resolved twice.
    let root = std::path::absolute(&fetched.root).map_err(FetchError::io(&fetched.root))?;
    let command = CommandSpec::from_prefix("python", &[python.to_string()], &root)?
        .arg("-m")
        .arg("lib2to3")
        .arg("-n")
        .arg("-w")
        .arg("-o")
        .arg(root.join(MIGRATED_DIR))
        .arg(root.join(BUILD_SCRIPT));
    runner.run(&command)?;

    let text = fs::read_to_string(&migrated).map_err(FetchError::io(&migrated))?;
    let stripped = strip_denylisted_lines(&text);
    let removed = text.lines().count() - stripped.lines().count();
    fs::write(&migrated, stripped).map_err(FetchError::io(&migrated))?;

    tracing::info!(version = %release.version, removed, "migrated legacy build script");
    Ok(migrated)
}

/// Drop every line whose trimmed text is in [`MIGRATION_DENYLIST`].
///
/// Kept lines keep their original terminators.
#[must_use]
pub fn strip_denylisted_lines(text: &str) -> String {
    text.split_inclusive('\n')
        .filter(|line| !MIGRATION_DENYLIST.contains(&line.trim()))
        .collect()
}
