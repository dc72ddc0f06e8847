//! Secrets the service needs before it can accept any request.

use std::fmt;

use showroom_common::ConfigError;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const ASSISTANT_ID_VAR: &str = "OPENAI_ASSISTANT_ID";

/// API credential plus the identifier of the hosted assistant to run.
#[derive(Clone)]
pub struct Credentials {
    pub api_key: String,
    pub assistant_id: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[REDACTED]")
            .field("assistant_id", &self.assistant_id)
            .finish()
    }
}

impl Credentials {
    /// Read both secrets from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read both secrets through `lookup`. Blank values count as missing,
    /// and every missing name is reported at once.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = read(API_KEY_VAR);
        let assistant_id = read(ASSISTANT_ID_VAR);

        match (api_key, assistant_id) {
            (Some(api_key), Some(assistant_id)) => Ok(Self {
                api_key,
                assistant_id,
            }),
            (api_key, assistant_id) => {
                let missing: Vec<&str> = [
                    (api_key.is_none(), API_KEY_VAR),
                    (assistant_id.is_none(), ASSISTANT_ID_VAR),
                ]
                .iter()
                .filter(|(absent, _)| *absent)
                .map(|(_, name)| *name)
                .collect();
                Err(ConfigError::MissingEnv(missing.join(", ")))
            }
        }
    }
}
