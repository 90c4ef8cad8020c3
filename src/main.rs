use anyhow::Result;
use botmetrics::cli::{Cli, Commands};
use botmetrics::commands::{self, AnalyzeConfig};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Analyze {
            process,
            ontology,
            contexts,
            config,
            format,
            output,
        } => commands::handle_analyze(AnalyzeConfig {
            process,
            ontology,
            contexts,
            config,
            format,
            output,
        }),
        Commands::Init { force } => commands::init_config(&std::env::current_dir()?, force),
        Commands::Explain => {
            commands::explain_metrics();
            Ok(())
        }
    }
}

// RUST_LOG wins over the verbosity flag
fn init_logging(verbosity: u8) {
    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(match verbosity {
            0 => "botmetrics=warn",
            1 => "botmetrics=info",
            2 => "botmetrics=debug",
            _ => "botmetrics=trace",
        })
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    debug!("Logging initialized (verbosity={})", verbosity);
}
