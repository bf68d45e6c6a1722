use anyhow::Result;
use clap::Parser;
use grantlift::cli::{Cli, Commands, InputArgs, PolicyArgs};
use grantlift::commands::{ProjectConfig, ValidateConfig};
use grantlift::output::OutputFormat;
use grantlift::projection::InputOverrides;
use std::path::PathBuf;

// Main orchestrator function
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging goes to stderr before any command runs
    grantlift::observability::init_tracing(cli.verbosity);

    match cli.command {
        Commands::Project {
            inputs,
            policy,
            format,
            output,
            plain,
            clamp,
        } => {
            let project_config = build_project_config(
                cli.config, inputs, policy, format, output, plain, clamp,
            );
            grantlift::commands::handle_project(project_config)
        }
        Commands::Validate { inputs } => {
            grantlift::commands::validate_inputs(ValidateConfig {
                config_path: cli.config,
                overrides: InputOverrides::from(inputs),
            })
        }
        Commands::Init { force } => grantlift::commands::init_config(force),
    }
}

// Pure function to build project configuration
fn build_project_config(
    config_path: Option<PathBuf>,
    inputs: InputArgs,
    policy: PolicyArgs,
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
    plain: bool,
    clamp: bool,
) -> ProjectConfig {
    ProjectConfig {
        config_path,
        overrides: InputOverrides::from(inputs),
        revenue_model: policy.model.map(Into::into),
        total_policy: policy.total.map(Into::into),
        format,
        output,
        plain,
        clamp,
    }
}
