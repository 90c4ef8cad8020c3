use crate::io::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "botmetrics")]
#[command(about = "Complexity and automation metrics for RPA process models", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the metrics record of a process model
    Analyze {
        /// Process tree document (JSON)
        process: PathBuf,

        /// Ontology document (JSON or YAML)
        #[arg(long, env = "BOTMETRICS_ONTOLOGY")]
        ontology: PathBuf,

        /// Node context mapping (JSON or YAML)
        #[arg(long)]
        contexts: Option<PathBuf>,

        /// Configuration file (defaults to .botmetrics.toml discovery)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format (defaults to the configured format, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Initialize a configuration file in the current directory
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Explain every metric of the record
    Explain,
}
