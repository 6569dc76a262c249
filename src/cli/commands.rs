//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// TypeScript interface generator CLI
#[derive(Parser, Debug)]
#[command(name = "typegen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seed for generated type names
    #[arg(long, global = true, default_value = "1")]
    pub seed: u64,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch one JSON sample from a URL and emit its interfaces
    Fetch {
        /// URL to fetch
        url: String,

        /// Root record name (generated when omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Infer interfaces from a local JSON file or stdin
    Infer {
        /// Input file (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Root record name
        #[arg(short, long, default_value = "Main")]
        name: String,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run every source in a manifest and merge the results
    Batch {
        /// Manifest file (YAML)
        #[arg(short, long, default_value = "typegen.yaml")]
        manifest: PathBuf,

        /// Override the manifest's output file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Interactive session accumulating definitions across calls
    Repl,
}
