use anyhow::Context;
use clap::Parser;
use stdlibs_config::StdlibsConfig;
use stdlibs_core::RELEASES;
use stdlibs_fetch::SystemRunner;

mod cli;
mod pipeline;

fn main() {
    if let Err(error) = run() {
        eprintln!("stdlibs-gen error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let mut config = StdlibsConfig::load().context("failed to load stdlibs configuration")?;
    cli.apply_overrides(&mut config);

    let runner = SystemRunner;
    let generator = pipeline::Generator::new(&config, &runner);
    generator.regen_all(RELEASES, &mut std::io::stdout().lock())?;
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("STDLIBS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
