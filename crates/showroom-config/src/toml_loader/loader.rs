//! Core TOML config loading: read from a path, or fall back to defaults.

use crate::schema::ShowroomConfig;
use showroom_common::ConfigError;
use std::path::Path;
use tracing::info;

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// Validation is left to the caller.
pub fn load_from_path(path: &Path) -> Result<ShowroomConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::FileNotFound(path.to_path_buf())
        } else {
            ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
        }
    })?;

    let config: ShowroomConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from `path`, returning defaults when the file does not exist.
///
/// Nothing is written; `showroom init-config` creates the file on request.
pub fn load_or_default(path: &Path) -> Result<ShowroomConfig, ConfigError> {
    match load_from_path(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, using defaults", path.display());
            Ok(ShowroomConfig::default())
        }
        Err(e) => Err(e),
    }
}
