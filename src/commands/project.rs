use super::{merge_inputs, prepare_inputs};
use crate::config::{load_config, GrantliftConfig};
use crate::errors::GrantliftError;
use crate::formatting::FormattingConfig;
use crate::io;
use crate::output::{create_writer, OutputFormat, ProjectionReport};
use crate::projection::{
    compute_with_policy, FormulaPolicy, InputOverrides, RevenueModel, TotalPolicy,
};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, debug_span, info};

/// Everything the `project` command needs, already converted from CLI args.
#[derive(Debug, Clone, Default)]
pub struct ProjectConfig {
    pub config_path: Option<PathBuf>,
    pub overrides: InputOverrides,
    pub revenue_model: Option<RevenueModel>,
    pub total_policy: Option<TotalPolicy>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub plain: bool,
    pub clamp: bool,
}

// Pure function: CLI policy flags over the config file's policy
fn resolve_policy(
    file_config: &GrantliftConfig,
    revenue_model: Option<RevenueModel>,
    total_policy: Option<TotalPolicy>,
) -> FormulaPolicy {
    let base = file_config.policy();
    FormulaPolicy::new(
        revenue_model.unwrap_or(base.revenue_model),
        total_policy.unwrap_or(base.total_policy),
    )
}

// Pure function to create formatting configuration
fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}

/// Build the report without rendering it.
pub fn build_report(
    config: &ProjectConfig,
    file_config: &GrantliftConfig,
) -> Result<ProjectionReport> {
    let inputs = prepare_inputs(
        merge_inputs(file_config, config.overrides.clone()),
        config.clamp,
    )?;
    let policy = resolve_policy(file_config, config.revenue_model, config.total_policy);

    let metrics = {
        let _span = debug_span!("compute", policy = %policy, period = %inputs.period).entered();
        debug!(?inputs, "Projecting revenue");
        compute_with_policy(&inputs, &policy)
    };
    info!(
        total = metrics.total_projected_revenue,
        growth_pct = metrics.total_growth_pct,
        "Projection complete"
    );

    Ok(ProjectionReport::new(inputs, metrics))
}

pub fn handle_project(config: ProjectConfig) -> Result<()> {
    let file_config = load_config(config.config_path.as_deref())?;
    let report = build_report(&config, &file_config)?;

    let format = config
        .format
        .or(file_config.default_format())
        .unwrap_or_default();
    let formatting = create_formatting_config(config.plain || file_config.plain());

    if let Some(path) = config.output.as_deref().filter(|p| p.is_dir()) {
        let message = format!("{} is a directory", path.display());
        return Err(GrantliftError::cli("--output", message).into());
    }
    let out = io::open_output(config.output.as_deref())?;
    let mut writer = create_writer(format, out, formatting);
    writer
        .write_report(&report)
        .context("Failed to write projection report")?;

    if let Some(path) = &config.output {
        info!("Wrote {:?} report to {}", format, path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::Period;

    #[test]
    fn test_resolve_policy_prefers_flags() {
        let file_config: GrantliftConfig = toml::from_str(
            "[policy]\nrevenue_model = \"spend_driven\"\ntotal_policy = \"all_channels\"",
        )
        .unwrap();

        let policy = resolve_policy(&file_config, None, Some(TotalPolicy::NewChannels));
        assert_eq!(policy.revenue_model, RevenueModel::SpendDriven);
        assert_eq!(policy.total_policy, TotalPolicy::NewChannels);
    }

    #[test]
    fn test_build_report_applies_overrides() {
        let config = ProjectConfig {
            overrides: InputOverrides {
                period: Some(Period::Annual),
                ..Default::default()
            },
            ..Default::default()
        };
        let report = build_report(&config, &GrantliftConfig::default()).unwrap();
        assert_eq!(report.metrics.current_revenue, 300_000.0);
        assert_eq!(report.inputs.period, Period::Annual);
    }

    #[test]
    fn test_build_report_rejects_invalid_inputs() {
        let config = ProjectConfig {
            overrides: InputOverrides {
                lifetime_years: Some(25),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(build_report(&config, &GrantliftConfig::default()).is_err());

        let clamped = ProjectConfig {
            clamp: true,
            ..config
        };
        let report = build_report(&clamped, &GrantliftConfig::default()).unwrap();
        assert_eq!(report.inputs.lifetime_years, 10);
    }
}
