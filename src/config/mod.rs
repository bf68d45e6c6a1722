//! Configuration loading for grantlift.
//!
//! Precedence, lowest to highest: built-in defaults, `.grantlift.toml`
//! (explicit `--config` or discovered in the current directory and its
//! ancestors), command-line flags.

mod core;
mod loader;

pub use self::core::{GrantliftConfig, OutputConfig, DEFAULT_CONFIG_TEMPLATE};
pub use loader::{
    directory_ancestors, discover_config_from, load_config, load_config_from, parse_config,
    CONFIG_FILE_NAME,
};
