//! Projection inputs, their defaults, and their documented ranges.
//!
//! Every field is independently optional when read from a config file; a
//! missing field takes its default. Percentages are expressed on a 0-100 scale
//! and only divided by 100 inside the formulas.

use crate::errors::{GrantliftError, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Valid range for conversion-rate percentages.
pub const CONVERSION_RATE_BOUNDS: (f64, f64) = (0.1, 100.0);
/// Valid range for the ad grant traffic lift percentage.
pub const TRAFFIC_INCREASE_BOUNDS: (f64, f64) = (0.0, 500.0);
/// Valid range for the lifetime capture/retention percentage.
pub const CAPTURE_RATE_BOUNDS: (f64, f64) = (0.0, 100.0);
/// Valid range for the lifetime horizon in years.
pub const LIFETIME_YEARS_BOUNDS: (u32, u32) = (1, 10);
/// Smallest accepted gift or lifetime value.
pub const MIN_DONATION: f64 = 1.0;
/// Smallest accepted budget or cost-per-click when clamping.
pub const MIN_SPEND: f64 = 0.01;
/// Ceiling for every currency input. Keeps the revenue products finite even at
/// the largest traffic figure.
pub const MAX_AMOUNT: f64 = 1.0e9;

/// Reporting period for the recurring revenue lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Monthly,
    #[serde(alias = "yearly")]
    Annual,
}

impl Period {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "monthly" | "month" => Some(Self::Monthly),
            "annual" | "yearly" | "year" => Some(Self::Annual),
            _ => None,
        }
    }

    /// Scalar converting a monthly recurring figure to this period.
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Monthly => 1.0,
            Self::Annual => 12.0,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "Monthly"),
            Self::Annual => write!(f, "Annual"),
        }
    }
}

/// Caller-supplied projection inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputParameters {
    /// Monthly visits today.
    #[serde(default = "default_current_traffic")]
    pub current_traffic: u64,

    /// Share of visitors who donate today (%).
    #[serde(default = "default_current_conversion_rate")]
    pub current_conversion_rate: f64,

    /// Average gift today ($).
    #[serde(default = "default_avg_donation")]
    pub avg_donation: f64,

    /// Relative traffic lift attributable to the ad grant (%).
    #[serde(default = "default_ad_grant_traffic_increase_pct")]
    pub ad_grant_traffic_increase_pct: f64,

    /// Conversion rate of ad grant traffic (%); `None` reuses the current rate.
    #[serde(default)]
    pub ad_grant_conversion_rate: Option<f64>,

    /// Conversion rate of paid-ads traffic (%).
    #[serde(default = "default_paid_ads_conversion_rate")]
    pub paid_ads_conversion_rate: f64,

    /// Monthly paid-ads budget ($). Spend-driven model only.
    #[serde(default = "default_paid_ads_budget")]
    pub paid_ads_budget: f64,

    /// Average cost per click ($). Spend-driven model only.
    #[serde(default = "default_avg_cpc")]
    pub avg_cpc: f64,

    /// Average gift of a paid-ads donor ($); `None` reuses `avg_donation`.
    #[serde(default)]
    pub paid_avg_donation: Option<f64>,

    /// Share of acquired donors who become lifetime donors (%).
    #[serde(
        default = "default_lifetime_capture_rate",
        alias = "lifetime_retention_pct"
    )]
    pub lifetime_capture_rate: f64,

    /// Value attributed to a retained donor per horizon year ($).
    #[serde(
        default = "default_avg_lifetime_value",
        alias = "avg_lifetime_value_per_donor"
    )]
    pub avg_lifetime_value: f64,

    /// Retention horizon multiplier.
    #[serde(default = "default_lifetime_years")]
    pub lifetime_years: u32,

    #[serde(default)]
    pub period: Period,

    #[serde(default = "default_include")]
    pub include_ad_grant: bool,

    #[serde(default = "default_include")]
    pub include_paid_ads: bool,
}

impl Default for InputParameters {
    fn default() -> Self {
        Self {
            current_traffic: default_current_traffic(),
            current_conversion_rate: default_current_conversion_rate(),
            avg_donation: default_avg_donation(),
            ad_grant_traffic_increase_pct: default_ad_grant_traffic_increase_pct(),
            ad_grant_conversion_rate: None,
            paid_ads_conversion_rate: default_paid_ads_conversion_rate(),
            paid_ads_budget: default_paid_ads_budget(),
            avg_cpc: default_avg_cpc(),
            paid_avg_donation: None,
            lifetime_capture_rate: default_lifetime_capture_rate(),
            avg_lifetime_value: default_avg_lifetime_value(),
            lifetime_years: default_lifetime_years(),
            period: Period::default(),
            include_ad_grant: default_include(),
            include_paid_ads: default_include(),
        }
    }
}

pub fn default_current_traffic() -> u64 {
    10_000
}
pub fn default_current_conversion_rate() -> f64 {
    5.0
}
pub fn default_avg_donation() -> f64 {
    50.0
}
pub fn default_ad_grant_traffic_increase_pct() -> f64 {
    100.0
}
pub fn default_paid_ads_conversion_rate() -> f64 {
    2.5
}
pub fn default_paid_ads_budget() -> f64 {
    2_000.0
}
pub fn default_avg_cpc() -> f64 {
    2.0
}
pub fn default_lifetime_capture_rate() -> f64 {
    10.0
}
pub fn default_avg_lifetime_value() -> f64 {
    500.0
}
pub fn default_lifetime_years() -> u32 {
    1
}
fn default_include() -> bool {
    true
}

/// A field whose value was changed by [`InputParameters::clamp_with_report`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClampAdjustment {
    pub field: &'static str,
    pub from: f64,
    pub to: f64,
}

impl InputParameters {
    /// Ad grant conversion rate, falling back to the current rate.
    pub fn effective_ad_grant_conversion_rate(&self) -> f64 {
        self.ad_grant_conversion_rate
            .unwrap_or(self.current_conversion_rate)
    }

    /// Paid-ads gift size, falling back to the current average gift.
    pub fn effective_paid_avg_donation(&self) -> f64 {
        self.paid_avg_donation.unwrap_or(self.avg_donation)
    }

    /// Check every field against its documented range, collecting ALL
    /// violations instead of stopping at the first one.
    pub fn validate(&self) -> Result<(), GrantliftError> {
        let errors = self.collect_violations();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(GrantliftError::Validation(errors))
        }
    }

    pub fn collect_violations(&self) -> Vec<ValidationError> {
        let (years_min, years_max) = LIFETIME_YEARS_BOUNDS;
        let mut checks = vec![
            check_range(
                "current_conversion_rate",
                self.current_conversion_rate,
                CONVERSION_RATE_BOUNDS,
            ),
            check_min("avg_donation", self.avg_donation, MIN_DONATION),
            check_range(
                "ad_grant_traffic_increase_pct",
                self.ad_grant_traffic_increase_pct,
                TRAFFIC_INCREASE_BOUNDS,
            ),
            check_range(
                "paid_ads_conversion_rate",
                self.paid_ads_conversion_rate,
                CONVERSION_RATE_BOUNDS,
            ),
            check_positive("paid_ads_budget", self.paid_ads_budget),
            check_positive("avg_cpc", self.avg_cpc),
            check_range(
                "lifetime_capture_rate",
                self.lifetime_capture_rate,
                CAPTURE_RATE_BOUNDS,
            ),
            check_min("avg_lifetime_value", self.avg_lifetime_value, MIN_DONATION),
        ];

        if let Some(rate) = self.ad_grant_conversion_rate {
            checks.push(check_range(
                "ad_grant_conversion_rate",
                rate,
                CONVERSION_RATE_BOUNDS,
            ));
        }
        if let Some(gift) = self.paid_avg_donation {
            checks.push(check_min("paid_avg_donation", gift, MIN_DONATION));
        }
        if !(years_min..=years_max).contains(&self.lifetime_years) {
            checks.push(Some(
                ValidationError::for_field("lifetime_years", "out of range")
                    .with_context(
                        format!("{years_min}-{years_max}"),
                        self.lifetime_years.to_string(),
                    ),
            ));
        }

        checks.into_iter().flatten().collect()
    }

    /// Copy with every field forced into its documented range.
    pub fn clamped(&self) -> Self {
        self.clamp_with_report().0
    }

    /// Like [`clamped`](Self::clamped), also reporting which fields moved.
    pub fn clamp_with_report(&self) -> (Self, Vec<ClampAdjustment>) {
        let mut adjustments = Vec::new();
        let mut clamp = |field: &'static str, value: f64, lo: f64, hi: f64| -> f64 {
            let to = clamp_f64(value, lo, hi);
            if to != value {
                adjustments.push(ClampAdjustment {
                    field,
                    from: value,
                    to,
                });
            }
            to
        };

        let (conv_lo, conv_hi) = CONVERSION_RATE_BOUNDS;
        let (lift_lo, lift_hi) = TRAFFIC_INCREASE_BOUNDS;
        let (cap_lo, cap_hi) = CAPTURE_RATE_BOUNDS;

        let clamped = Self {
            current_traffic: self.current_traffic,
            current_conversion_rate: clamp(
                "current_conversion_rate",
                self.current_conversion_rate,
                conv_lo,
                conv_hi,
            ),
            avg_donation: clamp("avg_donation", self.avg_donation, MIN_DONATION, MAX_AMOUNT),
            ad_grant_traffic_increase_pct: clamp(
                "ad_grant_traffic_increase_pct",
                self.ad_grant_traffic_increase_pct,
                lift_lo,
                lift_hi,
            ),
            ad_grant_conversion_rate: self
                .ad_grant_conversion_rate
                .map(|rate| clamp("ad_grant_conversion_rate", rate, conv_lo, conv_hi)),
            paid_ads_conversion_rate: clamp(
                "paid_ads_conversion_rate",
                self.paid_ads_conversion_rate,
                conv_lo,
                conv_hi,
            ),
            paid_ads_budget: clamp(
                "paid_ads_budget",
                self.paid_ads_budget,
                MIN_SPEND,
                MAX_AMOUNT,
            ),
            avg_cpc: clamp("avg_cpc", self.avg_cpc, MIN_SPEND, MAX_AMOUNT),
            paid_avg_donation: self
                .paid_avg_donation
                .map(|gift| clamp("paid_avg_donation", gift, MIN_DONATION, MAX_AMOUNT)),
            lifetime_capture_rate: clamp(
                "lifetime_capture_rate",
                self.lifetime_capture_rate,
                cap_lo,
                cap_hi,
            ),
            avg_lifetime_value: clamp(
                "avg_lifetime_value",
                self.avg_lifetime_value,
                MIN_DONATION,
                MAX_AMOUNT,
            ),
            lifetime_years: self.lifetime_years,
            period: self.period,
            include_ad_grant: self.include_ad_grant,
            include_paid_ads: self.include_paid_ads,
        };

        let (years_min, years_max) = LIFETIME_YEARS_BOUNDS;
        let years = self.lifetime_years.clamp(years_min, years_max);
        if years != self.lifetime_years {
            adjustments.push(ClampAdjustment {
                field: "lifetime_years",
                from: f64::from(self.lifetime_years),
                to: f64::from(years),
            });
        }

        (
            Self {
                lifetime_years: years,
                ..clamped
            },
            adjustments,
        )
    }
}

// NaN falls to the lower bound; infinities land on the nearer bound.
fn clamp_f64(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_nan() {
        lo
    } else {
        value.clamp(lo, hi)
    }
}

fn check_range(field: &str, value: f64, (lo, hi): (f64, f64)) -> Option<ValidationError> {
    if value.is_finite() && (lo..=hi).contains(&value) {
        None
    } else {
        Some(
            ValidationError::for_field(field, "out of range")
                .with_context(format!("{lo}-{hi}"), value.to_string()),
        )
    }
}

fn check_min(field: &str, value: f64, min: f64) -> Option<ValidationError> {
    if !value.is_finite() || value > MAX_AMOUNT {
        return Some(exceeds_ceiling(field, value));
    }
    if value >= min {
        None
    } else {
        Some(
            ValidationError::for_field(field, "below minimum")
                .with_context(format!(">= {min}"), value.to_string()),
        )
    }
}

fn check_positive(field: &str, value: f64) -> Option<ValidationError> {
    if !value.is_finite() || value > MAX_AMOUNT {
        return Some(exceeds_ceiling(field, value));
    }
    if value > 0.0 {
        None
    } else {
        Some(
            ValidationError::for_field(field, "must be greater than zero")
                .with_context("> 0", value.to_string()),
        )
    }
}

fn exceeds_ceiling(field: &str, value: f64) -> ValidationError {
    ValidationError::for_field(field, "must be a finite amount")
        .with_context(format!("<= {MAX_AMOUNT}"), value.to_string())
}

/// Field-by-field overrides layered on top of a base set of inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputOverrides {
    pub current_traffic: Option<u64>,
    pub current_conversion_rate: Option<f64>,
    pub avg_donation: Option<f64>,
    pub ad_grant_traffic_increase_pct: Option<f64>,
    pub ad_grant_conversion_rate: Option<f64>,
    pub paid_ads_conversion_rate: Option<f64>,
    pub paid_ads_budget: Option<f64>,
    pub avg_cpc: Option<f64>,
    pub paid_avg_donation: Option<f64>,
    pub lifetime_capture_rate: Option<f64>,
    pub avg_lifetime_value: Option<f64>,
    pub lifetime_years: Option<u32>,
    pub period: Option<Period>,
    pub include_ad_grant: Option<bool>,
    pub include_paid_ads: Option<bool>,
}

impl InputOverrides {
    pub fn apply(self, base: InputParameters) -> InputParameters {
        InputParameters {
            current_traffic: self.current_traffic.unwrap_or(base.current_traffic),
            current_conversion_rate: self
                .current_conversion_rate
                .unwrap_or(base.current_conversion_rate),
            avg_donation: self.avg_donation.unwrap_or(base.avg_donation),
            ad_grant_traffic_increase_pct: self
                .ad_grant_traffic_increase_pct
                .unwrap_or(base.ad_grant_traffic_increase_pct),
            ad_grant_conversion_rate: self
                .ad_grant_conversion_rate
                .or(base.ad_grant_conversion_rate),
            paid_ads_conversion_rate: self
                .paid_ads_conversion_rate
                .unwrap_or(base.paid_ads_conversion_rate),
            paid_ads_budget: self.paid_ads_budget.unwrap_or(base.paid_ads_budget),
            avg_cpc: self.avg_cpc.unwrap_or(base.avg_cpc),
            paid_avg_donation: self.paid_avg_donation.or(base.paid_avg_donation),
            lifetime_capture_rate: self
                .lifetime_capture_rate
                .unwrap_or(base.lifetime_capture_rate),
            avg_lifetime_value: self.avg_lifetime_value.unwrap_or(base.avg_lifetime_value),
            lifetime_years: self.lifetime_years.unwrap_or(base.lifetime_years),
            period: self.period.unwrap_or(base.period),
            include_ad_grant: self.include_ad_grant.unwrap_or(base.include_ad_grant),
            include_paid_ads: self.include_paid_ads.unwrap_or(base.include_paid_ads),
        }
    }
}
