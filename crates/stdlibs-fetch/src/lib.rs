//! # stdlibs-fetch
//!
//! Gets a release's source tree onto disk and hands back the build script
//! the parser should read.
//!
//! - [`ensure_release`] downloads and unpacks the archive into the cache
//!   unless its directory already exists.
//! - [`prepare_build_script`] runs `lib2to3` over 2.x `setup.py` files on
//!   first extraction and strips lines the migrated output still gets wrong.
//!
//! Every external program goes through [`CommandRunner`]; nothing here
//! retries, times out, or cleans up after a failed command.

mod archive;
mod error;
mod normalize;
mod runner;
#[cfg(test)]
mod test_support;

pub use archive::{FetchedRelease, ensure_release};
pub use error::FetchError;
pub use normalize::{MIGRATION_DENYLIST, prepare_build_script, strip_denylisted_lines};
pub use runner::{CommandRunner, CommandSpec, SystemRunner};
