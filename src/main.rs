mod application;
mod cli;
mod data;
mod domain;
mod infra;
mod stats;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("annotator_agreement=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
