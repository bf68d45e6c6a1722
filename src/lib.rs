// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod observability;
pub mod output;
pub mod projection;

// Re-export commonly used types
pub use crate::errors::{GrantliftError, ValidationError};

pub use crate::projection::{
    compute, compute_with_policy, FormulaPolicy, InputOverrides, InputParameters, OutputMetrics,
    Period, RevenueModel, TotalPolicy, FORMULA_POLICY_VERSION,
};

pub use crate::output::{create_writer, OutputFormat, ProjectionReport, ReportWriter};
