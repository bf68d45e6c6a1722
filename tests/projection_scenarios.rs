//! End-to-end projection scenarios through the public library API.

use grantlift::output::{render_to_string, OutputFormat, ProjectionReport};
use grantlift::formatting::FormattingConfig;
use grantlift::{
    compute, compute_with_policy, FormulaPolicy, InputParameters, Period, RevenueModel,
    TotalPolicy,
};
use pretty_assertions::assert_eq;

fn scenario_inputs() -> InputParameters {
    InputParameters {
        current_traffic: 10_000,
        current_conversion_rate: 5.0,
        avg_donation: 50.0,
        ad_grant_traffic_increase_pct: 100.0,
        paid_ads_conversion_rate: 2.5,
        lifetime_capture_rate: 10.0,
        avg_lifetime_value: 500.0,
        ..Default::default()
    }
}

#[test]
fn test_baseline_monthly_projection() {
    let metrics = compute(&scenario_inputs());

    assert_eq!(metrics.projected_traffic, 20_000.0);
    assert_eq!(metrics.current_revenue, 25_000.0);
    assert_eq!(metrics.ad_grant_revenue, 50_000.0);
    assert_eq!(metrics.paid_ads_revenue, 25_000.0);
    assert_eq!(metrics.lifetime_leads_captured, 2_000.0);
    assert_eq!(metrics.lifetime_value_revenue, 1_000_000.0);
    assert_eq!(metrics.total_projected_revenue, 1_075_000.0);
    assert_eq!(metrics.total_growth_pct, 4_200.0);
}

#[test]
fn test_all_channels_total_includes_current() {
    let policy = FormulaPolicy::new(RevenueModel::TrafficDriven, TotalPolicy::AllChannels);
    let metrics = compute_with_policy(&scenario_inputs(), &policy);

    assert_eq!(metrics.total_projected_revenue, 1_100_000.0);
    assert_eq!(metrics.revenue_increase(), 1_075_000.0);
}

#[test]
fn test_spend_driven_acquisition() {
    let inputs = InputParameters {
        paid_ads_budget: 2_000.0,
        avg_cpc: 2.0,
        ..scenario_inputs()
    };
    let policy = FormulaPolicy::new(RevenueModel::SpendDriven, TotalPolicy::NewChannels);
    let metrics = compute_with_policy(&inputs, &policy);

    assert_eq!(metrics.estimated_clicks, 1_000.0);
    assert_eq!(metrics.new_paid_donors, 25.0);
    assert_eq!(metrics.paid_ads_revenue, 1_250.0);
}

#[test]
fn test_channels_excluded() {
    let inputs = InputParameters {
        include_ad_grant: false,
        include_paid_ads: false,
        ..scenario_inputs()
    };
    let metrics = compute(&inputs);

    assert_eq!(metrics.ad_grant_revenue, 0.0);
    assert_eq!(metrics.paid_ads_revenue, 0.0);
    assert_eq!(metrics.total_projected_revenue, metrics.lifetime_value_revenue);
}

#[test]
fn test_annual_period_scales_current_revenue() {
    let inputs = InputParameters {
        period: Period::Annual,
        ..scenario_inputs()
    };
    let metrics = compute(&inputs);

    assert_eq!(metrics.current_revenue, 300_000.0);
    assert_eq!(metrics.ad_grant_revenue, 600_000.0);
    assert_eq!(metrics.lifetime_value_revenue, 1_000_000.0);
}

#[test]
fn test_markdown_report_renders_scenario() {
    let inputs = scenario_inputs();
    let report = ProjectionReport::new(inputs.clone(), compute(&inputs));
    let output =
        render_to_string(&report, OutputFormat::Markdown, FormattingConfig::plain()).unwrap();

    assert!(output.contains("Revenue Growth Breakdown"));
    assert!(output.contains("`$1,075,000.00`"));
    assert!(output.contains("`4200.0%`"));
}

#[test]
fn test_out_of_range_inputs_report_every_field() {
    let inputs = InputParameters {
        current_conversion_rate: 0.0,
        avg_cpc: 0.0,
        lifetime_years: 11,
        ..scenario_inputs()
    };
    let err = inputs.validate().unwrap_err();
    let fields: Vec<_> = err
        .validation_errors()
        .iter()
        .map(|e| e.field.as_str())
        .collect();

    assert_eq!(
        fields,
        vec!["current_conversion_rate", "avg_cpc", "lifetime_years"]
    );
}

#[test]
fn test_infinite_gift_from_config_is_rejected_or_clamped() {
    let config: grantlift::config::GrantliftConfig =
        toml::from_str("[inputs]\navg_donation = inf").unwrap();
    let inputs = config.inputs();

    let err = inputs.validate().unwrap_err();
    assert_eq!(err.validation_errors()[0].field, "avg_donation");

    let clamped = inputs.clamped();
    let report = ProjectionReport::new(clamped.clone(), compute(&clamped));
    assert!(report.metrics.total_projected_revenue.is_finite());
    assert!(report.metrics.total_growth_pct.is_finite());

    let json = render_to_string(&report, OutputFormat::Json, FormattingConfig::plain()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(json["metrics"]["total_projected_revenue"].is_f64());
    assert!(json["metrics"]["total_growth_pct"].is_f64());
}
