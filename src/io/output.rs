use crate::metrics::{BotModelMetrics, MetricKind, MetricValue};
use colored::*;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

impl OutputFormat {
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "terminal" => Some(Self::Terminal),
            _ => None,
        }
    }
}

pub trait OutputWriter {
    fn write_metrics(&mut self, process: &str, metrics: &BotModelMetrics) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_metrics(&mut self, _process: &str, metrics: &BotModelMetrics) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(metrics)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_metrics(&mut self, process: &str, metrics: &BotModelMetrics) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Bot Model Metrics".bold().blue())?;
        writeln!(self.writer, "{}", "=================".blue())?;
        writeln!(self.writer, "Process: {}", process)?;
        writeln!(self.writer)?;

        let width = MetricKind::ALL
            .iter()
            .map(|kind| kind.label().len())
            .max()
            .unwrap_or(0);

        for (kind, value) in metrics.entries() {
            writeln!(
                self.writer,
                "  {:<width$}  {}",
                kind.label(),
                format_value(value),
                width = width
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

fn format_value(value: MetricValue) -> ColoredString {
    match value {
        MetricValue::Count(n) => n.to_string().normal(),
        MetricValue::Ratio(r) if r.is_defined() => r.to_string().normal(),
        MetricValue::Ratio(r) => r.to_string().dimmed(),
    }
}

pub fn create_writer<'a>(format: OutputFormat, writer: Box<dyn Write + 'a>) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}
