//! Archive download and extraction into the persistent cache.

use std::fs;
use std::path::{Path, PathBuf};

use stdlibs_config::ToolsConfig;
use stdlibs_core::Release;

use crate::error::FetchError;
use crate::runner::{CommandRunner, CommandSpec};

/// An extracted release tree in the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedRelease {
    /// `<cache_dir>/<cache_dir_name>`.
    pub root: PathBuf,
    /// True when this call downloaded and unpacked the archive.
    pub freshly_extracted: bool,
}

/// Make sure `release` is unpacked under `cache_dir`.
///
/// An existing extraction directory is trusted as-is and no commands run.
/// Otherwise the configured download and extract commands run, in that
/// order, inside `cache_dir`.
///
/// # Errors
///
/// Returns [`FetchError`] if the cache directory cannot be created or either
/// command fails. A failure may leave a partial download behind.
pub fn ensure_release(
    release: &Release,
    cache_dir: &Path,
    tools: &ToolsConfig,
    runner: &dyn CommandRunner,
) -> Result<FetchedRelease, FetchError> {
    let root = cache_dir.join(release.cache_dir_name());
    if root.exists() {
        tracing::debug!(version = %release.version, root = %root.display(), "using cached tree");
        return Ok(FetchedRelease {
            root,
            freshly_extracted: false,
        });
    }

    fs::create_dir_all(cache_dir).map_err(FetchError::io(cache_dir))?;

    let download =
        CommandSpec::from_prefix("download", &tools.download, cache_dir)?.arg(release.url);
    runner.run(&download)?;

    let extract =
        CommandSpec::from_prefix("extract", &tools.extract, cache_dir)?.arg(release.archive_name());
    runner.run(&extract)?;

    tracing::info!(version = %release.version, root = %root.display(), "extracted release");
    Ok(FetchedRelease {
        root,
        freshly_extracted: true,
    })
}
