//! Full configuration validation.
//!
//! Checks the timing relationships the request budget depends on and the
//! shape of every endpoint. Each domain has its own submodule; this
//! function calls them all and collects errors into a single `ConfigError`.

mod endpoints;
mod helpers;
mod timing;


use crate::schema::ShowroomConfig;
use showroom_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ShowroomConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    timing::validate_budget(&mut errors, config);
    timing::validate_catalog_timeout(&mut errors, config);
    endpoints::validate_server(&mut errors, config);
    endpoints::validate_urls(&mut errors, config);
    helpers::validate_range(
        &mut errors,
        "catalog.max_results",
        config.catalog.max_results as u64,
        1,
        4,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
