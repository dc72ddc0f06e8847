//! Configuration schema types for the showroom service.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults sized for a serverless host
//! with a ten second execution limit.

mod assistant;
mod catalog;
mod server;
mod system;

pub use assistant::*;
pub use catalog::*;
pub use server::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for the showroom service.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ShowroomConfig {
    pub server: ServerConfig,
    pub assistant: AssistantConfig,
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: ShowroomConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8888);
        assert_eq!(config.assistant.poll_interval_ms, 500);
        assert_eq!(config.assistant.budget_ms, 9500);
        assert_eq!(config.catalog.timeout_secs, 7);
        assert_eq!(config.catalog.max_results, 4);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: ShowroomConfig = toml::from_str(
            r#"
[assistant]
budget_ms = 8000
"#,
        )
        .unwrap();
        assert_eq!(config.assistant.budget_ms, 8000);
        assert_eq!(config.assistant.platform_limit_ms, 10_000);
        assert_eq!(config.assistant.tool_output, "Done.");
    }

    #[test]
    fn durations_derive_from_millis() {
        let config = ShowroomConfig::default();
        assert_eq!(
            config.assistant.budget(),
            std::time::Duration::from_millis(9500)
        );
        assert_eq!(
            config.assistant.poll_interval(),
            std::time::Duration::from_millis(500)
        );
        assert_eq!(config.catalog.timeout(), std::time::Duration::from_secs(7));
    }
}
