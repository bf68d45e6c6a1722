//! Revenue projection engine.
//!
//! Converts funnel metrics (traffic, conversion, gift size) into current,
//! incremental, and lifetime revenue figures for an ad grant program,
//! supplementary paid ads, and long-term donor value.
//!
//! # Example
//!
//! ```rust
//! use grantlift::projection::{compute, InputParameters};
//!
//! let inputs = InputParameters {
//!     current_traffic: 10_000,
//!     current_conversion_rate: 5.0,
//!     avg_donation: 50.0,
//!     ..Default::default()
//! };
//! let metrics = compute(&inputs);
//! assert_eq!(metrics.current_revenue, 25_000.0);
//! ```

pub mod engine;
pub mod formulas;
pub mod inputs;
pub mod outputs;
pub mod policy;

pub use engine::{compute, compute_with_policy};
pub use formulas::{
    aggregate_total, compute_acquired_donors, compute_channel_revenue, compute_current_revenue,
    compute_lifetime_revenue, compute_retained_donors, compute_retained_value,
    compute_spend_driven_acquisition, compute_traffic, growth_percent, RevenueLines,
};
pub use inputs::{ClampAdjustment, InputOverrides, InputParameters, Period};
pub use outputs::OutputMetrics;
pub use policy::{FormulaPolicy, RevenueModel, TotalPolicy, FORMULA_POLICY_VERSION};
