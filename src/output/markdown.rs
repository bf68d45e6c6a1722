use super::{ProjectionReport, ReportWriter};
use crate::formatting::{format_count, format_currency, format_percent};
use std::io::Write;

/// Markdown "Revenue Growth Breakdown" table.
pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &ProjectionReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_breakdown(report)?;
        self.write_footer(report)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &ProjectionReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## 📈 Revenue Growth Breakdown")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Period: {} | Policy: {}",
            report.metrics.period, report.metrics.policy
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_breakdown(&mut self, report: &ProjectionReport) -> anyhow::Result<()> {
        let m = &report.metrics;

        writeln!(self.writer, "| Revenue Source | Amount |")?;
        writeln!(self.writer, "|----------------|--------|")?;
        self.write_row("📍 Current Revenue", &format_currency(m.current_revenue))?;
        self.write_row("🎯 Ad Grant Revenue", &format_currency(m.ad_grant_revenue))?;
        if m.estimated_clicks > 0.0 {
            self.write_row(
                "🖱️ Estimated Paid Clicks",
                &format_count(m.estimated_clicks),
            )?;
            self.write_row("🙌 New Paid Donors", &format_count(m.new_paid_donors))?;
        }
        self.write_row("🚀 Paid Ads Revenue", &format_currency(m.paid_ads_revenue))?;
        self.write_row(
            "💎 Lifetime Leads Captured",
            &format!("{} leads", format_count(m.lifetime_leads_captured)),
        )?;
        self.write_row(
            "🌟 Lifetime Value Revenue",
            &format_currency(m.lifetime_value_revenue),
        )?;
        writeln!(
            self.writer,
            "| **🎉 Total Projected Revenue** | **`{}`** |",
            format_currency(m.total_projected_revenue)
        )?;
        writeln!(
            self.writer,
            "| **📊 Total Revenue Increase** | **`{}`** |",
            format_percent(m.total_growth_pct)
        )?;
        Ok(())
    }

    fn write_row(&mut self, label: &str, value: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "| {label} | `{value}` |")?;
        Ok(())
    }

    fn write_footer(&mut self, report: &ProjectionReport) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "_Projected monthly traffic: {} visits._",
            format_count(report.metrics.projected_traffic)
        )?;
        Ok(())
    }
}
