//! Gauge model for proportional visualizations.
//!
//! Three gauges (current, ad grant, total) share one axis anchored at
//! `total_projected_revenue * GAUGE_HEADROOM`, so their fills are comparable.

use crate::projection::OutputMetrics;
use serde::Serialize;

/// Axis headroom above the projected total.
pub const GAUGE_HEADROOM: f64 = 1.2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gauge {
    pub label: &'static str,
    pub value: f64,
    pub axis_max: f64,
    /// `(value - current) / current`; absent for the baseline gauge and when
    /// current revenue is zero.
    pub delta_relative: Option<f64>,
    pub color: &'static str,
}

impl Gauge {
    /// Share of the axis covered by the value, in [0, 1].
    pub fn fill_fraction(&self) -> f64 {
        if self.axis_max <= 0.0 {
            return 0.0;
        }
        (self.value / self.axis_max).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeSet {
    pub current: Gauge,
    pub ad_grant: Gauge,
    pub total: Gauge,
}

impl GaugeSet {
    pub fn from_metrics(metrics: &OutputMetrics) -> Self {
        let axis_max = metrics.total_projected_revenue * GAUGE_HEADROOM;
        let baseline = metrics.current_revenue;

        Self {
            current: Gauge {
                label: "Current Revenue",
                value: baseline,
                axis_max,
                delta_relative: None,
                color: "white",
            },
            ad_grant: Gauge {
                label: "Ad Grant Revenue",
                value: metrics.ad_grant_revenue,
                axis_max,
                delta_relative: relative_delta(metrics.ad_grant_revenue, baseline),
                color: "blue",
            },
            total: Gauge {
                label: "Total Potential Revenue",
                value: metrics.total_projected_revenue,
                axis_max,
                delta_relative: relative_delta(metrics.total_projected_revenue, baseline),
                color: "green",
            },
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Gauge> {
        [&self.current, &self.ad_grant, &self.total].into_iter()
    }
}

fn relative_delta(value: f64, reference: f64) -> Option<f64> {
    (reference != 0.0).then(|| (value - reference) / reference)
}
