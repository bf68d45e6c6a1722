//! Report renderers.
//!
//! The projection engine returns a flat [`OutputMetrics`] record; this module
//! turns it into something a person reads: a terminal table with gauge bars, a
//! Markdown breakdown, or JSON for other tools.

pub mod gauges;
pub mod json;
pub mod markdown;
pub mod terminal;

use crate::formatting::FormattingConfig;
use crate::projection::{InputParameters, OutputMetrics};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

pub use gauges::{Gauge, GaugeSet, GAUGE_HEADROOM};
pub use json::JsonWriter;
pub use markdown::MarkdownWriter;
pub use terminal::TerminalWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Markdown,
    Json,
}

/// Everything a renderer needs: the inputs that were projected and the result.
#[derive(Debug, Clone)]
pub struct ProjectionReport {
    pub inputs: InputParameters,
    pub metrics: OutputMetrics,
    pub gauges: GaugeSet,
}

impl ProjectionReport {
    pub fn new(inputs: InputParameters, metrics: OutputMetrics) -> Self {
        let gauges = GaugeSet::from_metrics(&metrics);
        Self {
            inputs,
            metrics,
            gauges,
        }
    }
}

pub trait ReportWriter {
    fn write_report(&mut self, report: &ProjectionReport) -> anyhow::Result<()>;
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    formatting: FormattingConfig,
) -> Box<dyn ReportWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
    }
}

/// Render a report into a string, mostly for tests and embedding.
pub fn render_to_string(
    report: &ProjectionReport,
    format: OutputFormat,
    formatting: FormattingConfig,
) -> anyhow::Result<String> {
    let mut buffer = Vec::new();
    {
        let mut writer = create_writer(format, Box::new(&mut buffer), formatting);
        writer.write_report(report)?;
    }
    Ok(String::from_utf8(buffer)?)
}
