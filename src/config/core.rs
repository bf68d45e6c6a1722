use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;
use crate::projection::{FormulaPolicy, InputParameters};

/// Root configuration structure for grantlift
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GrantliftConfig {
    /// Baseline projection inputs; missing fields take built-in defaults
    #[serde(default)]
    pub inputs: Option<InputParameters>,

    /// Formula policy (acquisition model and total definition)
    #[serde(default)]
    pub policy: Option<FormulaPolicy>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_format: Option<OutputFormat>,

    /// ASCII-only output without colors or emoji
    #[serde(default)]
    pub plain: bool,
}

impl GrantliftConfig {
    pub fn inputs(&self) -> InputParameters {
        self.inputs.clone().unwrap_or_default()
    }

    pub fn policy(&self) -> FormulaPolicy {
        self.policy.unwrap_or_default()
    }

    pub fn default_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.default_format)
    }

    pub fn plain(&self) -> bool {
        self.output.as_ref().is_some_and(|o| o.plain)
    }
}

/// Contents written by `grantlift init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# grantlift configuration

[inputs]
current_traffic = 10000            # monthly visits
current_conversion_rate = 5.0      # %
avg_donation = 50.0                # $
ad_grant_traffic_increase_pct = 100.0
# ad_grant_conversion_rate = 5.0   # defaults to current_conversion_rate
paid_ads_conversion_rate = 2.5
paid_ads_budget = 2000.0           # spend-driven model only
avg_cpc = 2.0                      # spend-driven model only
# paid_avg_donation = 50.0         # defaults to avg_donation
lifetime_capture_rate = 10.0
avg_lifetime_value = 500.0
lifetime_years = 1
period = "monthly"                 # or "annual"
include_ad_grant = true
include_paid_ads = true

[policy]
revenue_model = "traffic_driven"   # or "spend_driven"
total_policy = "new_channels"      # or "all_channels"

[output]
default_format = "terminal"        # terminal, markdown, json
plain = false
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_template_matches_builtin_defaults() {
        let config: GrantliftConfig = toml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.inputs(), InputParameters::default());
        assert_eq!(config.policy(), FormulaPolicy::default());
        assert_eq!(config.default_format(), Some(OutputFormat::Terminal));
        assert!(!config.plain());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: GrantliftConfig = toml::from_str("").unwrap();
        assert_eq!(config, GrantliftConfig::default());
        assert_eq!(config.inputs(), InputParameters::default());
        assert_eq!(config.default_format(), None);
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        assert!(toml::from_str::<GrantliftConfig>("[thresholds]\ncomplexity = 10").is_err());
    }
}
