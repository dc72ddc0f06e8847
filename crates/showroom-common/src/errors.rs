use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("missing environment variable: {0}")]
    MissingEnv(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ShowroomError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("assistant error: {0}")]
    Assistant(String),

    #[error("catalog error: {0}")]
    Catalog(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("assistant.budget_ms too large".into());
        assert_eq!(
            err.to_string(),
            "config validation error: assistant.budget_ms too large"
        );

        let err = ConfigError::MissingEnv("OPENAI_API_KEY".into());
        assert_eq!(
            err.to_string(),
            "missing environment variable: OPENAI_API_KEY"
        );
    }

    #[test]
    fn showroom_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: ShowroomError = config_err.into();
        assert!(matches!(err, ShowroomError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn showroom_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
        let err: ShowroomError = io_err.into();
        assert!(matches!(err, ShowroomError::Io(_)));
        assert!(err.to_string().contains("port taken"));
    }

    #[test]
    fn showroom_error_component_messages() {
        let err = ShowroomError::Assistant("run not found".into());
        assert_eq!(err.to_string(), "assistant error: run not found");

        let err = ShowroomError::Catalog("feed unreachable".into());
        assert_eq!(err.to_string(), "catalog error: feed unreachable");
    }
}
