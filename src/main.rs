use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod report;
mod simulation;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("block_viz_bench=debug,info")
    } else {
        EnvFilter::new("block_viz_bench=warn")
    };

    // stdout is reserved for the results
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    cli::run(cli)
}
