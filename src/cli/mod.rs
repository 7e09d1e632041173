pub mod rank;
pub mod schema;
pub mod serve;

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bankrank")]
#[command(
    author,
    version,
    about = "Ranks a DeFi protocol's net deposits against US banks by consolidated assets"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the ranking pipeline once and print the windowed result
    Rank(RankArgs),

    /// Serve the ranking as a JSON endpoint
    Serve(ServeArgs),

    /// Print JSON Schema for config validation
    Schema,
}

#[derive(Parser, Clone)]
pub struct RankArgs {
    /// Path to config file
    #[arg(short, long, default_value = "bankrank.yaml")]
    pub config: PathBuf,

    /// Override entries shown on each side of the inserted protocol
    #[arg(long)]
    pub window: Option<u32>,

    /// Print a plain table instead of JSON
    #[arg(long)]
    pub table: bool,
}

#[derive(Parser, Clone)]
pub struct ServeArgs {
    /// Path to config file
    #[arg(short, long, default_value = "bankrank.yaml")]
    pub config: PathBuf,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3400")]
    pub bind: SocketAddr,
}
