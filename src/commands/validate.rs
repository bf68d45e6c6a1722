use super::merge_inputs;
use crate::config::load_config;
use crate::errors::GrantliftError;
use crate::formatting::{icon, FormattingConfig};
use crate::projection::InputOverrides;
use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct ValidateConfig {
    pub config_path: Option<PathBuf>,
    pub overrides: InputOverrides,
}

/// Check the merged inputs, printing a one-line verdict. Every violation is
/// carried in the returned error.
pub fn validate_inputs(config: ValidateConfig) -> Result<()> {
    let file_config = load_config(config.config_path.as_deref())?;
    let inputs = merge_inputs(&file_config, config.overrides);
    let formatter = FormattingConfig::from_env().formatter();

    let violations = inputs.collect_violations();
    if violations.is_empty() {
        println!(
            "{} {}",
            icon(formatter.as_ref(), "✓"),
            formatter.success("All inputs within range")
        );
        return Ok(());
    }

    println!(
        "{} {} input(s) out of range",
        icon(formatter.as_ref(), "✗"),
        violations.len()
    );
    Err(GrantliftError::Validation(violations).into())
}
