use crate::config::{self, BotmetricsConfig};
use crate::io::{self, create_writer, OutputFormat};
use crate::metrics::{calculate_metrics, BotModelMetrics};
use crate::model::{ContextMap, Ontology};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

pub struct AnalyzeConfig {
    pub process: PathBuf,
    pub ontology: PathBuf,
    pub contexts: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let settings = load_settings(&config)?;
    let metrics = compute_metrics(&config, &settings)?;

    let format = config
        .format
        .or_else(|| settings.default_format())
        .unwrap_or(OutputFormat::Terminal);
    let sink: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout()),
    };

    create_writer(format, sink).write_metrics(&process_name(&config.process), &metrics)?;

    if let Some(path) = &config.output {
        info!("Metrics written to {}", path.display());
    }
    Ok(())
}

fn load_settings(config: &AnalyzeConfig) -> Result<BotmetricsConfig> {
    match &config.config {
        Some(path) => Ok(config::load_config_from_path(path)?),
        None => Ok(config::load_config()),
    }
}

/// Read the inputs named by `config` and compute the metrics record
pub fn compute_metrics(
    config: &AnalyzeConfig,
    settings: &BotmetricsConfig,
) -> Result<BotModelMetrics> {
    let tree = io::read_process_tree(&config.process)?;
    let ontology = Ontology::load(&config.ontology)?;
    let contexts = match &config.contexts {
        Some(path) => io::read_contexts(path)?,
        None => ContextMap::new(),
    };

    info!(
        process = %config.process.display(),
        nodes = tree.node_info.len(),
        "Analyzing process model"
    );

    calculate_metrics(&tree, &ontology, &contexts, settings.calculator_options())
        .with_context(|| format!("Failed to compute metrics for {}", config.process.display()))
}

fn process_name(path: &std::path::Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
