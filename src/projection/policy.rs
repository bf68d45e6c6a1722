//! Formula policy selection.
//!
//! Several formula families exist for the same projection. A deployment picks
//! exactly one combination through [`FormulaPolicy`], and the chosen policy is
//! stamped on every result together with [`FORMULA_POLICY_VERSION`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Version of the formula set implemented by the engine.
///
/// Bump whenever a formula changes in a way that alters any output for the
/// same input and policy.
pub const FORMULA_POLICY_VERSION: u32 = 1;

/// How paid-ads donors are acquired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevenueModel {
    /// Paid ads convert the same projected traffic pool as the ad grant.
    #[default]
    #[serde(alias = "traffic")]
    TrafficDriven,
    /// Paid ads buy clicks: `budget / cpc` visitors convert at the paid rate.
    #[serde(alias = "spend")]
    SpendDriven,
}

impl RevenueModel {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "traffic" | "traffic_driven" => Some(Self::TrafficDriven),
            "spend" | "spend_driven" => Some(Self::SpendDriven),
            _ => None,
        }
    }
}

impl fmt::Display for RevenueModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TrafficDriven => write!(f, "traffic-driven"),
            Self::SpendDriven => write!(f, "spend-driven"),
        }
    }
}

/// Which revenue lines make up `total_projected_revenue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TotalPolicy {
    /// Ad grant + paid ads + lifetime value. Current revenue is the baseline
    /// the total is compared against, not a part of it.
    #[default]
    NewChannels,
    /// Current revenue plus every new channel.
    AllChannels,
}

impl TotalPolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "new" | "new_channels" => Some(Self::NewChannels),
            "all" | "all_channels" => Some(Self::AllChannels),
            _ => None,
        }
    }

    pub fn includes_current(self) -> bool {
        matches!(self, Self::AllChannels)
    }
}

impl fmt::Display for TotalPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NewChannels => write!(f, "new-channels"),
            Self::AllChannels => write!(f, "all-channels"),
        }
    }
}

/// The formula policy the engine runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormulaPolicy {
    #[serde(default)]
    pub revenue_model: RevenueModel,

    #[serde(default)]
    pub total_policy: TotalPolicy,
}

impl FormulaPolicy {
    pub fn new(revenue_model: RevenueModel, total_policy: TotalPolicy) -> Self {
        Self {
            revenue_model,
            total_policy,
        }
    }

    pub fn version(&self) -> u32 {
        FORMULA_POLICY_VERSION
    }
}

impl fmt::Display for FormulaPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "v{} {} / {}",
            FORMULA_POLICY_VERSION, self.revenue_model, self.total_policy
        )
    }
}
