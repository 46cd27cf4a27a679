use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Wireline request executor
#[derive(Debug, Parser)]
#[command(name = "wireline", about = "Target and call OpenAI-compatible backends")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "wireline.toml", env = "WIRELINE_CONFIG")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the wire API and endpoint URL of each provider
    Targets {
        /// Only show this provider
        #[arg(short, long)]
        provider: Option<String>,
    },
    /// Send a JSON request body to a provider and print the response
    Send {
        /// Provider to call
        #[arg(short, long)]
        provider: String,

        /// File holding the JSON body; stdin when omitted
        #[arg(short, long)]
        body: Option<PathBuf>,
    },
}
