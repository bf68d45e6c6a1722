//! Projection engine.
//!
//! Stateless: every call builds a fresh [`OutputMetrics`] from the inputs and
//! the formula policy alone.

use super::formulas::{
    aggregate_total, compute_acquired_donors, compute_channel_revenue, compute_current_revenue,
    compute_retained_donors, compute_retained_value, compute_spend_driven_acquisition,
    compute_traffic, growth_percent, RevenueLines,
};
use super::inputs::InputParameters;
use super::outputs::OutputMetrics;
use super::policy::{FormulaPolicy, RevenueModel, FORMULA_POLICY_VERSION};

/// Project revenue under the default formula policy.
pub fn compute(inputs: &InputParameters) -> OutputMetrics {
    compute_with_policy(inputs, &FormulaPolicy::default())
}

/// Project revenue under an explicit formula policy.
///
/// Inputs are assumed to be range-valid; see [`InputParameters::validate`].
pub fn compute_with_policy(inputs: &InputParameters, policy: &FormulaPolicy) -> OutputMetrics {
    let multiplier = inputs.period.multiplier();
    let current_traffic = inputs.current_traffic as f64;
    let projected_traffic = compute_traffic(current_traffic, inputs.ad_grant_traffic_increase_pct);

    let current_revenue = compute_current_revenue(
        current_traffic,
        inputs.current_conversion_rate,
        inputs.avg_donation,
        multiplier,
    );

    let ad_grant_revenue = compute_channel_revenue(
        projected_traffic,
        inputs.effective_ad_grant_conversion_rate(),
        inputs.avg_donation,
        multiplier,
        inputs.include_ad_grant,
    );

    let paid = match policy.revenue_model {
        RevenueModel::TrafficDriven => traffic_driven_paid_ads(inputs, projected_traffic, multiplier),
        RevenueModel::SpendDriven => spend_driven_paid_ads(inputs, multiplier),
    };

    let lifetime_leads_captured =
        compute_retained_donors(paid.lifetime_base, inputs.lifetime_capture_rate);
    let lifetime_value_revenue = compute_retained_value(
        lifetime_leads_captured,
        inputs.avg_lifetime_value,
        inputs.lifetime_years,
    );

    let lines = RevenueLines {
        current: current_revenue,
        ad_grant: ad_grant_revenue,
        paid_ads: paid.revenue,
        lifetime_value: lifetime_value_revenue,
    };
    let total_projected_revenue = aggregate_total(&lines, policy.total_policy);

    OutputMetrics {
        policy: *policy,
        policy_version: FORMULA_POLICY_VERSION,
        period: inputs.period,
        projected_traffic,
        current_revenue,
        ad_grant_revenue,
        estimated_clicks: paid.clicks,
        new_paid_donors: paid.donors,
        paid_ads_revenue: paid.revenue,
        lifetime_leads_captured,
        lifetime_value_revenue,
        total_projected_revenue,
        total_growth_pct: growth_percent(total_projected_revenue, current_revenue),
    }
}

struct PaidAdsLine {
    clicks: f64,
    donors: f64,
    revenue: f64,
    /// Acquired-donor count the lifetime line is computed from.
    lifetime_base: f64,
}

// Paid ads convert the projected traffic pool; lifetime leads come from that
// same pool.
fn traffic_driven_paid_ads(
    inputs: &InputParameters,
    projected_traffic: f64,
    multiplier: f64,
) -> PaidAdsLine {
    PaidAdsLine {
        clicks: 0.0,
        donors: 0.0,
        revenue: compute_channel_revenue(
            projected_traffic,
            inputs.paid_ads_conversion_rate,
            inputs.effective_paid_avg_donation(),
            multiplier,
            inputs.include_paid_ads,
        ),
        lifetime_base: projected_traffic,
    }
}

fn spend_driven_paid_ads(inputs: &InputParameters, multiplier: f64) -> PaidAdsLine {
    let clicks = compute_spend_driven_acquisition(inputs.paid_ads_budget, inputs.avg_cpc);
    let donors = compute_acquired_donors(clicks, inputs.paid_ads_conversion_rate);

    PaidAdsLine {
        clicks,
        donors,
        revenue: compute_channel_revenue(
            clicks,
            inputs.paid_ads_conversion_rate,
            inputs.effective_paid_avg_donation(),
            multiplier,
            inputs.include_paid_ads,
        ),
        lifetime_base: if inputs.include_paid_ads { donors } else { 0.0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::inputs::Period;
    use crate::projection::policy::TotalPolicy;

    fn spend_policy() -> FormulaPolicy {
        FormulaPolicy::new(RevenueModel::SpendDriven, TotalPolicy::NewChannels)
    }

    #[test]
    fn test_default_projection() {
        let metrics = compute(&InputParameters::default());

        assert_eq!(metrics.projected_traffic, 20_000.0);
        assert_eq!(metrics.current_revenue, 25_000.0);
        assert_eq!(metrics.ad_grant_revenue, 50_000.0);
        assert_eq!(metrics.paid_ads_revenue, 25_000.0);
        assert_eq!(metrics.lifetime_leads_captured, 2_000.0);
        assert_eq!(metrics.lifetime_value_revenue, 1_000_000.0);
        assert_eq!(metrics.total_projected_revenue, 1_075_000.0);
        assert_eq!(metrics.total_growth_pct, 4_200.0);
        assert_eq!(metrics.estimated_clicks, 0.0);
        assert_eq!(metrics.policy_version, FORMULA_POLICY_VERSION);
    }

    #[test]
    fn test_spend_driven_projection() {
        let inputs = InputParameters {
            paid_ads_budget: 2_000.0,
            avg_cpc: 2.0,
            paid_ads_conversion_rate: 2.0,
            paid_avg_donation: Some(50.0),
            lifetime_capture_rate: 40.0,
            avg_lifetime_value: 500.0,
            lifetime_years: 3,
            ..Default::default()
        };
        let metrics = compute_with_policy(&inputs, &spend_policy());

        assert_eq!(metrics.estimated_clicks, 1_000.0);
        assert_eq!(metrics.new_paid_donors, 20.0);
        assert_eq!(metrics.paid_ads_revenue, 1_000.0);
        assert_eq!(metrics.lifetime_leads_captured, 8.0);
        assert_eq!(metrics.lifetime_value_revenue, 12_000.0);
        assert_eq!(metrics.total_projected_revenue, 50_000.0 + 1_000.0 + 12_000.0);
    }

    #[test]
    fn test_excluding_paid_ads_in_spend_model_drops_lifetime_line() {
        let inputs = InputParameters {
            include_paid_ads: false,
            ..Default::default()
        };
        let metrics = compute_with_policy(&inputs, &spend_policy());

        assert_eq!(metrics.paid_ads_revenue, 0.0);
        assert_eq!(metrics.lifetime_value_revenue, 0.0);
        assert_eq!(metrics.total_projected_revenue, metrics.ad_grant_revenue);
    }

    #[test]
    fn test_all_channels_total_includes_current() {
        let policy = FormulaPolicy::new(RevenueModel::TrafficDriven, TotalPolicy::AllChannels);
        let metrics = compute_with_policy(&InputParameters::default(), &policy);
        assert_eq!(metrics.total_projected_revenue, 1_100_000.0);
    }

    #[test]
    fn test_zero_traffic_has_zero_growth() {
        let inputs = InputParameters {
            current_traffic: 0,
            ..Default::default()
        };
        let metrics = compute(&inputs);
        assert_eq!(metrics.current_revenue, 0.0);
        assert_eq!(metrics.total_growth_pct, 0.0);
    }

    #[test]
    fn test_annual_does_not_scale_lifetime_line() {
        let monthly = compute(&InputParameters::default());
        let annual = compute(&InputParameters {
            period: Period::Annual,
            ..Default::default()
        });
        assert_eq!(annual.current_revenue, monthly.current_revenue * 12.0);
        assert_eq!(annual.lifetime_value_revenue, monthly.lifetime_value_revenue);
        assert_eq!(annual.period, Period::Annual);
    }

    #[test]
    fn test_lifetime_value_is_built_from_reported_leads() {
        let inputs = InputParameters {
            current_traffic: 7_321,
            ad_grant_traffic_increase_pct: 37.3,
            lifetime_capture_rate: 13.7,
            avg_lifetime_value: 412.9,
            lifetime_years: 7,
            ..Default::default()
        };
        for policy in [FormulaPolicy::default(), spend_policy()] {
            let metrics = compute_with_policy(&inputs, &policy);
            assert_eq!(
                metrics.lifetime_value_revenue,
                metrics.lifetime_leads_captured * 412.9 * 7.0
            );
        }
    }
}
