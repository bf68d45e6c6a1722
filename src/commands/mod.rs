//! CLI command implementations for grantlift.
//!
//! Available commands:
//! - **project**: Compute and render a revenue projection
//! - **validate**: Check merged inputs against their documented ranges
//! - **init**: Write a default `.grantlift.toml`

pub mod init;
pub mod project;
pub mod validate;

pub use init::init_config;
pub use project::{handle_project, ProjectConfig};
pub use validate::{validate_inputs, ValidateConfig};

use crate::config::GrantliftConfig;
use crate::errors::GrantliftError;
use crate::projection::{InputOverrides, InputParameters};
use tracing::warn;

/// Layer command-line overrides over the config file's inputs.
pub fn merge_inputs(config: &GrantliftConfig, overrides: InputOverrides) -> InputParameters {
    overrides.apply(config.inputs())
}

/// Boundary check before the engine runs: reject out-of-range inputs, or
/// clamp them when `clamp` is set.
pub fn prepare_inputs(
    inputs: InputParameters,
    clamp: bool,
) -> Result<InputParameters, GrantliftError> {
    if !clamp {
        inputs.validate()?;
        return Ok(inputs);
    }

    let (clamped, adjustments) = inputs.clamp_with_report();
    for adj in &adjustments {
        warn!(
            field = adj.field,
            from = adj.from,
            to = adj.to,
            "Clamped out-of-range input"
        );
    }
    Ok(clamped)
}
