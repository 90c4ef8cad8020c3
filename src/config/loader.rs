use std::path::{Path, PathBuf};

use super::core::BotmetricsConfig;
use crate::errors::{MetricsError, Result};
use tracing::{debug, warn};

pub const CONFIG_FILE_NAME: &str = ".botmetrics.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    std::fs::read_to_string(path)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<BotmetricsConfig, String> {
    let config = toml::from_str::<BotmetricsConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    validate_config(&config)?;
    Ok(config)
}

/// Classification concepts must be non-empty
pub fn validate_config(config: &BotmetricsConfig) -> std::result::Result<(), String> {
    let classification = config.classification();
    let blank = [
        ("automation_concept", &classification.automation_concept),
        ("decision_concept", &classification.decision_concept),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| format!("classification.{} must not be empty", field))
    .collect::<Vec<_>>();

    if blank.is_empty() {
        Ok(())
    } else {
        Err(blank.join("; "))
    }
}

/// Pure function to try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<BotmetricsConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file
pub fn load_config_from(start: PathBuf) -> BotmetricsConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            BotmetricsConfig::default()
        })
}

pub fn load_config() -> BotmetricsConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            BotmetricsConfig::default()
        }
    }
}

/// Load an explicitly requested config file. Unlike discovery, failures
/// here are errors.
pub fn load_config_from_path(path: &Path) -> Result<BotmetricsConfig> {
    let contents = read_config_file(path).map_err(|e| MetricsError::io(path, e))?;
    parse_and_validate_config(&contents).map_err(MetricsError::Config)
}
