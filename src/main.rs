use clap::Parser;
use tracing_subscriber::EnvFilter;

mod args;
mod batak;
mod deck;
mod french;
use self::args::Args;
use self::batak::cli_main;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    cli_main(&args)
}
