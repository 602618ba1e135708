use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod context;
mod output;

/// Env var holding a `tracing` filter directive, e.g. `form_store=debug`.
const LOG_ENV: &str = "FORMWORK_LOG";

fn main() {
    if let Err(error) = run() {
        eprintln!("formctl error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();

    if let cli::Commands::Schema = &cli.command {
        return commands::schema::handle(&flags);
    }

    let ctx = context::AppContext::init(&flags)
        .context("failed to initialize formwork storage")?;

    commands::dispatch::dispatch(cli.command, &ctx, &flags)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
