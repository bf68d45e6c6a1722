//! Pure revenue formulas.
//!
//! Each function is a single step of the projection. Percentages arrive on a
//! 0-100 scale. None of these functions validate their inputs; range checks
//! happen before the engine is invoked.

use super::policy::TotalPolicy;

#[inline]
fn fraction(pct: f64) -> f64 {
    pct / 100.0
}

/// Current traffic scaled by the ad grant lift.
pub fn compute_traffic(current_traffic: f64, increase_pct: f64) -> f64 {
    current_traffic * (1.0 + fraction(increase_pct))
}

pub fn compute_current_revenue(
    current_traffic: f64,
    conversion_rate: f64,
    avg_donation: f64,
    multiplier: f64,
) -> f64 {
    current_traffic * fraction(conversion_rate) * avg_donation * multiplier
}

/// Shared shape of every channel line: zero when the channel is excluded.
pub fn compute_channel_revenue(
    volume: f64,
    conversion_rate: f64,
    avg_value: f64,
    multiplier: f64,
    included: bool,
) -> f64 {
    if !included {
        return 0.0;
    }
    volume * fraction(conversion_rate) * avg_value * multiplier
}

/// Clicks bought by a budget. `cpc` must be positive.
pub fn compute_spend_driven_acquisition(budget: f64, cpc: f64) -> f64 {
    budget / cpc
}

/// Visitors converted at `conversion_rate`.
pub fn compute_acquired_donors(volume: f64, conversion_rate: f64) -> f64 {
    volume * fraction(conversion_rate)
}

/// Donors kept over the horizon, before any value is applied.
pub fn compute_retained_donors(acquired_donors: f64, retention_pct: f64) -> f64 {
    acquired_donors * fraction(retention_pct)
}

pub fn compute_lifetime_revenue(
    acquired_donors: f64,
    retention_pct: f64,
    lifetime_value: f64,
    years: u32,
) -> f64 {
    compute_retained_value(
        compute_retained_donors(acquired_donors, retention_pct),
        lifetime_value,
        years,
    )
}

/// Value of an already-retained donor count over the horizon.
pub fn compute_retained_value(retained_donors: f64, lifetime_value: f64, years: u32) -> f64 {
    retained_donors * lifetime_value * f64::from(years)
}

/// The revenue lines a total can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RevenueLines {
    pub current: f64,
    pub ad_grant: f64,
    pub paid_ads: f64,
    pub lifetime_value: f64,
}

pub fn aggregate_total(lines: &RevenueLines, policy: TotalPolicy) -> f64 {
    let new_channels = lines.ad_grant + lines.paid_ads + lines.lifetime_value;
    if policy.includes_current() {
        lines.current + new_channels
    } else {
        new_channels
    }
}

/// Relative growth of `total` over `baseline`, in percent.
///
/// A zero baseline yields 0 rather than infinity or NaN.
pub fn growth_percent(total: f64, baseline: f64) -> f64 {
    if baseline == 0.0 {
        return 0.0;
    }
    (total - baseline) / baseline * 100.0
}
