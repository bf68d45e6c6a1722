use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::core::GrantliftConfig;
use crate::errors::GrantliftError;

pub const CONFIG_FILE_NAME: &str = ".grantlift.toml";
const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse config from a TOML string; `path` is only used for error messages
pub fn parse_config(contents: &str, path: &Path) -> Result<GrantliftConfig, GrantliftError> {
    toml::from_str::<GrantliftConfig>(contents)
        .map_err(|e| GrantliftError::config(path, e.to_string()))
}

/// Load an explicitly requested config file. Missing files are an error.
pub fn load_config_from(path: &Path) -> Result<GrantliftConfig, GrantliftError> {
    let contents = fs::read_to_string(path).map_err(|e| GrantliftError::io(path, e))?;
    let config = parse_config(&contents, path)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

// A discovered candidate that is absent is skipped quietly; one that exists
// but cannot be read or parsed is skipped with a warning.
fn load_candidate(path: &Path) -> Option<GrantliftConfig> {
    match load_config_from(path) {
        Ok(config) => Some(config),
        Err(GrantliftError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            log::warn!("Skipping config candidate: {e}");
            None
        }
    }
}

/// `start` followed by its parents, at most `max_depth` directories in all
pub fn directory_ancestors(start: &Path, max_depth: usize) -> impl Iterator<Item = PathBuf> + '_ {
    start.ancestors().take(max_depth).map(Path::to_path_buf)
}

/// Search `start` and its ancestors for the first loadable config file
pub fn discover_config_from(start: PathBuf) -> GrantliftConfig {
    let found = directory_ancestors(&start, MAX_TRAVERSAL_DEPTH)
        .find_map(|dir| load_candidate(&dir.join(CONFIG_FILE_NAME)));

    found.unwrap_or_else(|| {
        log::debug!(
            "No {CONFIG_FILE_NAME} within {MAX_TRAVERSAL_DEPTH} levels of {}; using defaults",
            start.display()
        );
        GrantliftConfig::default()
    })
}

/// Load configuration: the explicit path if given, otherwise discovery from
/// the current directory.
pub fn load_config(explicit: Option<&Path>) -> Result<GrantliftConfig, GrantliftError> {
    if let Some(path) = explicit {
        return load_config_from(path);
    }

    match std::env::current_dir() {
        Ok(dir) => Ok(discover_config_from(dir)),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            Ok(GrantliftConfig::default())
        }
    }
}
