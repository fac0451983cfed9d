use std::path::PathBuf;

use clap::Parser;
use stdlibs_config::StdlibsConfig;

/// Top-level CLI parser for the `stdlibs-gen` binary.
///
/// Every tracked release is regenerated on each run; there are no
/// subcommands.
#[derive(Debug, Parser)]
#[command(
    name = "stdlibs-gen",
    version,
    about = "Regenerate the CPython standard library module tables"
)]
pub struct Cli {
    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,

    /// Download and extraction cache (overrides `paths.cache_dir`)
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Where generated tables are written (overrides `paths.output_dir`)
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

impl Cli {
    /// Apply path flags on top of the loaded configuration.
    pub fn apply_overrides(&self, config: &mut StdlibsConfig) {
        if let Some(dir) = &self.cache_dir {
            config.paths.cache_dir.clone_from(dir);
        }
        if let Some(dir) = &self.output_dir {
            config.paths.output_dir.clone_from(dir);
        }
    }
}
