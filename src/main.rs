use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod config;
mod error;
mod fallback;
mod parser;
mod pipeline;
mod provider;
mod ranking;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing - only show logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("bankrank=debug")
    } else {
        EnvFilter::new("bankrank=warn")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Rank(args) => cli::rank::execute(args).await,
        Commands::Serve(args) => cli::serve::execute(args).await,
        Commands::Schema => cli::schema::execute(),
    }
}
