//! Projection results.
//!
//! Built in one piece by the engine and never mutated afterwards. Revenue
//! lines are in dollars for the selected period; traffic and donor counts are
//! per month.

use super::formulas::RevenueLines;
use super::inputs::Period;
use super::policy::FormulaPolicy;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputMetrics {
    pub policy: FormulaPolicy,
    pub policy_version: u32,
    pub period: Period,

    pub projected_traffic: f64,
    pub current_revenue: f64,
    pub ad_grant_revenue: f64,

    /// Clicks bought by the paid-ads budget. Zero in the traffic-driven model.
    pub estimated_clicks: f64,
    /// Donors acquired through paid ads. Zero in the traffic-driven model.
    pub new_paid_donors: f64,
    pub paid_ads_revenue: f64,

    pub lifetime_leads_captured: f64,
    pub lifetime_value_revenue: f64,

    pub total_projected_revenue: f64,
    pub total_growth_pct: f64,
}

impl OutputMetrics {
    pub fn revenue_lines(&self) -> RevenueLines {
        RevenueLines {
            current: self.current_revenue,
            ad_grant: self.ad_grant_revenue,
            paid_ads: self.paid_ads_revenue,
            lifetime_value: self.lifetime_value_revenue,
        }
    }

    /// Lines scaled by the period multiplier.
    pub fn recurring_lines(&self) -> [f64; 3] {
        [
            self.current_revenue,
            self.ad_grant_revenue,
            self.paid_ads_revenue,
        ]
    }

    /// Absolute revenue gain over today's baseline.
    pub fn revenue_increase(&self) -> f64 {
        self.total_projected_revenue - self.current_revenue
    }
}
