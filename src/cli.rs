use crate::output::OutputFormat;
use crate::projection::{InputOverrides, Period, RevenueModel, TotalPolicy};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PeriodArg {
    /// Recurring lines per month
    Monthly,
    /// Recurring lines per year (12x monthly)
    Annual,
}

impl From<PeriodArg> for Period {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::Monthly => Period::Monthly,
            PeriodArg::Annual => Period::Annual,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelArg {
    /// Paid ads convert the projected traffic pool
    Traffic,
    /// Paid ads buy clicks from a budget at an average cost per click
    Spend,
}

impl From<ModelArg> for RevenueModel {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::Traffic => RevenueModel::TrafficDriven,
            ModelArg::Spend => RevenueModel::SpendDriven,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TotalArg {
    /// Ad grant + paid ads + lifetime value (default)
    NewChannels,
    /// Current revenue plus every new channel
    AllChannels,
}

impl From<TotalArg> for TotalPolicy {
    fn from(arg: TotalArg) -> Self {
        match arg {
            TotalArg::NewChannels => TotalPolicy::NewChannels,
            TotalArg::AllChannels => TotalPolicy::AllChannels,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "grantlift")]
#[command(about = "Nonprofit ad grant revenue projection calculator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to .grantlift.toml in this or a parent directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute and display a revenue projection
    Project {
        #[command(flatten)]
        inputs: InputArgs,

        #[command(flatten)]
        policy: PolicyArgs,

        /// Output format (defaults to the config file's, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Plain output (ASCII only, no colors, no emoji)
        #[arg(long)]
        plain: bool,

        /// Clamp out-of-range inputs instead of rejecting them
        #[arg(long)]
        clamp: bool,
    },

    /// Check inputs against their documented ranges
    Validate {
        #[command(flatten)]
        inputs: InputArgs,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Per-field input overrides. Unset flags keep the config/default value.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Current monthly traffic (visits)
    #[arg(long, value_name = "VISITS")]
    pub current_traffic: Option<u64>,

    /// Current conversion rate (%)
    #[arg(long, value_name = "PCT")]
    pub current_conversion_rate: Option<f64>,

    /// Average donation amount ($)
    #[arg(long, value_name = "USD")]
    pub avg_donation: Option<f64>,

    /// Traffic increase via ad grant (%)
    #[arg(long, visible_alias = "traffic-increase", value_name = "PCT")]
    pub ad_grant_traffic_increase_pct: Option<f64>,

    /// Ad grant conversion rate (%), defaults to the current rate
    #[arg(long, value_name = "PCT")]
    pub ad_grant_conversion_rate: Option<f64>,

    /// Paid ads conversion rate (%)
    #[arg(long, value_name = "PCT")]
    pub paid_ads_conversion_rate: Option<f64>,

    /// Monthly paid ads budget ($), spend-driven model
    #[arg(long, value_name = "USD")]
    pub paid_ads_budget: Option<f64>,

    /// Average cost per click ($), spend-driven model
    #[arg(long, value_name = "USD")]
    pub avg_cpc: Option<f64>,

    /// Average donation from a paid-ads donor ($), defaults to --avg-donation
    #[arg(long, value_name = "USD")]
    pub paid_avg_donation: Option<f64>,

    /// Lifetime lead capture / retention rate (%)
    #[arg(long, visible_alias = "lifetime-retention-pct", value_name = "PCT")]
    pub lifetime_capture_rate: Option<f64>,

    /// Average lifetime value per retained donor ($)
    #[arg(long, visible_alias = "avg-lifetime-value-per-donor", value_name = "USD")]
    pub avg_lifetime_value: Option<f64>,

    /// Retention horizon in years (1-10)
    #[arg(long, value_name = "YEARS")]
    pub lifetime_years: Option<u32>,

    /// Reporting period for recurring revenue
    #[arg(long, value_enum)]
    pub period: Option<PeriodArg>,

    /// Include ad grant revenue in totals
    #[arg(long, overrides_with = "no_ad_grant")]
    pub ad_grant: bool,

    /// Exclude ad grant revenue from totals
    #[arg(long, overrides_with = "ad_grant")]
    pub no_ad_grant: bool,

    /// Include paid ads revenue in totals
    #[arg(long, overrides_with = "no_paid_ads")]
    pub paid_ads: bool,

    /// Exclude paid ads revenue from totals
    #[arg(long, overrides_with = "paid_ads")]
    pub no_paid_ads: bool,
}

// Pure function: a pair of opposing flags to an optional override
fn toggle(enable: bool, disable: bool) -> Option<bool> {
    match (enable, disable) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl From<InputArgs> for InputOverrides {
    fn from(args: InputArgs) -> Self {
        Self {
            current_traffic: args.current_traffic,
            current_conversion_rate: args.current_conversion_rate,
            avg_donation: args.avg_donation,
            ad_grant_traffic_increase_pct: args.ad_grant_traffic_increase_pct,
            ad_grant_conversion_rate: args.ad_grant_conversion_rate,
            paid_ads_conversion_rate: args.paid_ads_conversion_rate,
            paid_ads_budget: args.paid_ads_budget,
            avg_cpc: args.avg_cpc,
            paid_avg_donation: args.paid_avg_donation,
            lifetime_capture_rate: args.lifetime_capture_rate,
            avg_lifetime_value: args.avg_lifetime_value,
            lifetime_years: args.lifetime_years,
            period: args.period.map(Period::from),
            include_ad_grant: toggle(args.ad_grant, args.no_ad_grant),
            include_paid_ads: toggle(args.paid_ads, args.no_paid_ads),
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct PolicyArgs {
    /// Paid ads acquisition model
    #[arg(long, value_enum)]
    pub model: Option<ModelArg>,

    /// Which revenue lines make up the projected total
    #[arg(long, value_enum)]
    pub total: Option<TotalArg>,
}
