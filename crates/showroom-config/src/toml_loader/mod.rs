//! TOML config file loading and creation.

mod loader;
mod paths;
mod template;

#[cfg(test)]
mod tests;

pub use loader::{load_from_path, load_or_default};
pub use paths::{create_default_config, resolve_config_path, CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE};
pub use template::default_config_toml;
