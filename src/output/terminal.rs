use super::{Gauge, ProjectionReport, ReportWriter};
use crate::formatting::{
    format_count, format_currency, format_percent, format_relative_delta, icon, FormattingConfig,
    OutputFormatter,
};
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use std::io::Write;

const BAR_WIDTH: usize = 40;

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
    unicode: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, config: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: config.formatter(),
            unicode: config.emoji.should_use_emoji(),
        }
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &ProjectionReport) -> anyhow::Result<()> {
        self.write_title(report)?;
        self.write_gauges(report)?;
        self.write_summary_table(report)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn write_title(&mut self, report: &ProjectionReport) -> anyhow::Result<()> {
        let title = format!(
            "{} Revenue Projection",
            icon(self.formatter.as_ref(), "📈")
        );
        writeln!(self.writer, "{}", self.formatter.header(title.trim()))?;
        writeln!(
            self.writer,
            "{}",
            self.formatter.dim(&format!(
                "{} figures, formula policy {}",
                report.metrics.period, report.metrics.policy
            ))
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_gauges(&mut self, report: &ProjectionReport) -> anyhow::Result<()> {
        let label_width = report
            .gauges
            .iter()
            .map(|g| g.label.len())
            .max()
            .unwrap_or(0);

        for gauge in report.gauges.iter() {
            let line = self.gauge_line(gauge, label_width);
            writeln!(self.writer, "{line}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn gauge_line(&self, gauge: &Gauge, label_width: usize) -> String {
        let (full, empty) = if self.unicode { ('█', '░') } else { ('#', '-') };
        let filled = (gauge.fill_fraction() * BAR_WIDTH as f64).round() as usize;
        let bar: String = std::iter::repeat(full)
            .take(filled)
            .chain(std::iter::repeat(empty).take(BAR_WIDTH - filled))
            .collect();

        let delta = gauge
            .delta_relative
            .map(|d| format!(" ({})", self.formatter.success(&format_relative_delta(d))))
            .unwrap_or_default();

        format!(
            "{:<width$} [{}] {}{}",
            gauge.label,
            self.formatter.paint(&bar, gauge.color),
            self.formatter.bold(&format_currency(gauge.value)),
            delta,
            width = label_width
        )
    }

    fn write_summary_table(&mut self, report: &ProjectionReport) -> anyhow::Result<()> {
        let m = &report.metrics;
        let f = self.formatter.as_ref();
        let label = |emoji: &str, text: &str| format!("{} {}", icon(f, emoji), text);

        let mut rows = vec![
            (label("📍", "Current Revenue"), format_currency(m.current_revenue)),
            (label("🎯", "Ad Grant Revenue"), format_currency(m.ad_grant_revenue)),
        ];
        if m.estimated_clicks > 0.0 {
            rows.push(("Estimated Paid Clicks".to_string(), format_count(m.estimated_clicks)));
            rows.push(("New Paid Donors".to_string(), format_count(m.new_paid_donors)));
        }
        rows.extend([
            (label("🚀", "Paid Ads Revenue"), format_currency(m.paid_ads_revenue)),
            (
                label("💎", "Lifetime Leads Captured"),
                format!("{} leads", format_count(m.lifetime_leads_captured)),
            ),
            (
                label("🌟", "Lifetime Value Revenue"),
                format_currency(m.lifetime_value_revenue),
            ),
        ]);

        let mut table = Table::new();
        table
            .load_preset(if self.unicode { UTF8_FULL } else { ASCII_FULL })
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Revenue Source", "Amount"]);

        for (source, amount) in rows {
            table.add_row(vec![
                Cell::new(source),
                Cell::new(amount).set_alignment(CellAlignment::Right),
            ]);
        }
        table.add_row(vec![
            Cell::new(label("🎉", "Total Projected Revenue")).add_attribute(Attribute::Bold),
            Cell::new(format_currency(m.total_projected_revenue))
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Bold),
        ]);
        table.add_row(vec![
            Cell::new(label("📊", "Total Revenue Increase")).add_attribute(Attribute::Bold),
            Cell::new(format_percent(m.total_growth_pct))
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Bold),
        ]);

        writeln!(self.writer, "{table}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{compute, InputParameters};

    fn render_plain(inputs: &InputParameters) -> String {
        let report = ProjectionReport::new(inputs.clone(), compute(inputs));
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer, FormattingConfig::plain())
            .write_report(&report)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_plain_output_is_ascii() {
        let output = render_plain(&InputParameters::default());
        assert!(output.is_ascii());
        assert!(output.contains("[CHART] Revenue Projection"));
        assert!(output.contains("Monthly figures"));
    }

    #[test]
    fn test_gauges_and_deltas() {
        let output = render_plain(&InputParameters::default());
        let current = output
            .lines()
            .find(|l| l.starts_with("Current Revenue"))
            .unwrap();
        let total = output
            .lines()
            .find(|l| l.starts_with("Total Potential Revenue"))
            .unwrap();

        assert!(current.ends_with("$25,000.00"));
        assert!(total.contains("$1,075,000.00 (+4200.0%)"));
        // Total sits at 1/1.2 of the axis: 33 of 40 cells
        assert!(total.contains(&format!("[{}{}]", "#".repeat(33), "-".repeat(7))));
    }

    #[test]
    fn test_summary_table_rows() {
        let output = render_plain(&InputParameters::default());
        assert!(output.contains("Revenue Source"));
        assert!(output.contains("[TOTAL] Total Projected Revenue"));
        assert!(output.contains("2,000 leads"));
        assert!(output.contains("4200.0%"));
    }
}
