use super::{GaugeSet, ProjectionReport, ReportWriter};
use crate::projection::{FormulaPolicy, InputParameters, OutputMetrics};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct Metadata {
    tool_version: &'static str,
    formula_policy_version: u32,
    generated_at: String,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    metadata: Metadata,
    inputs: &'a InputParameters,
    policy: &'a FormulaPolicy,
    metrics: &'a OutputMetrics,
    gauges: &'a GaugeSet,
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &ProjectionReport) -> anyhow::Result<()> {
        let json = JsonReport {
            metadata: Metadata {
                tool_version: env!("CARGO_PKG_VERSION"),
                formula_policy_version: report.metrics.policy_version,
                generated_at: chrono::Utc::now().to_rfc3339(),
            },
            inputs: &report.inputs,
            policy: &report.metrics.policy,
            metrics: &report.metrics,
            gauges: &report.gauges,
        };
        serde_json::to_writer_pretty(&mut self.writer, &json)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
