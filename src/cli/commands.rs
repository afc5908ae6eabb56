//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// List uploads stored on Irys by an EVM wallet
#[derive(Parser, Debug)]
#[command(name = "irys-uploads")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// GraphQL endpoint (overrides config and IRYS_GRAPHQL_ENDPOINT)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Gateway base URL (overrides config and IRYS_GATEWAY_BASE)
    #[arg(long, global = true)]
    pub gateway: Option<String>,

    /// Items requested per page
    #[arg(long, global = true)]
    pub page_size: Option<u32>,

    /// Maximum number of pages fetched
    #[arg(long, global = true)]
    pub max_iterations: Option<u32>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every upload owned by a wallet
    List {
        /// EVM wallet address (0x followed by 40 hex characters)
        wallet: String,

        /// Abort the whole listing after this many seconds
        #[arg(long)]
        deadline_secs: Option<u64>,
    },

    /// Print gateway URLs for item ids
    Url {
        /// Item ids
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}
