//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `dowser`.
#[derive(Debug, Parser)]
#[command(name = "dowser", version, about = "Run script-backed search sources")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a query against a configured source and print its JSON results.
    Search {
        /// The query bound into the source's script template.
        query: String,
        /// Source to run (defaults to the sole configured source).
        #[arg(short, long)]
        source: Option<String>,
        /// Path to the sources file.
        #[arg(short, long, default_value = "sources.yaml")]
        config: PathBuf,
        /// Extra KEY=VALUE environment entries for this call only.
        #[arg(short, long = "env", value_name = "KEY=VALUE", value_parser = parse_env_pair)]
        env: Vec<(String, String)>,
    },
    /// List the configured sources.
    Sources {
        /// Path to the sources file.
        #[arg(short, long, default_value = "sources.yaml")]
        config: PathBuf,
    },
}

/// Parses a `KEY=VALUE` argument into a pair.
fn parse_env_pair(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))
}
