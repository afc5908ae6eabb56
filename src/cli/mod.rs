//! CLI module
//!
//! Command-line caller for the collector.
//!
//! # Commands
//!
//! - `list` - List every upload owned by a wallet
//! - `url` - Print gateway URLs for item ids

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
