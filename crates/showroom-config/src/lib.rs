//! Showroom configuration system.
//!
//! Provides TOML-based configuration with full validation, plus the
//! environment credentials the service refuses to start without. All
//! config sections use defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use showroom_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod credentials;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use credentials::Credentials;
pub use schema::{ShowroomConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use showroom_common::ConfigError;

/// Load and validate config.
///
/// `explicit` is the `--config` override; without it the path comes from
/// `SHOWROOM_CONFIG` or `./showroom.toml`. A missing file yields defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<ShowroomConfig, ConfigError> {
    let path = toml_loader::resolve_config_path(explicit);
    let config = toml_loader::load_or_default(&path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ShowroomConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = ShowroomConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"server\""));
        assert!(json.contains("\"assistant\""));
        assert!(json.contains("\"catalog\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn load_config_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("showroom.toml");
        std::fs::write(&path, "[assistant]\nbudget_ms = 12000\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_config_accepts_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("showroom.toml");
        std::fs::write(&path, "[server]\nport = 3000\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.server.port, 3000);
    }
}
