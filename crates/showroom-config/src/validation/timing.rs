//! Timing constraints between the request budget, the host limit, and
//! the feed timeout.

use crate::schema::ShowroomConfig;

use super::helpers::{validate_below, validate_range};

pub(crate) fn validate_budget(errors: &mut Vec<String>, config: &ShowroomConfig) {
    let assistant = &config.assistant;
    validate_range(errors, "assistant.budget_ms", assistant.budget_ms, 1, u64::MAX);
    validate_below(
        errors,
        "assistant.budget_ms",
        assistant.budget_ms,
        "assistant.platform_limit_ms",
        assistant.platform_limit_ms,
    );
    validate_range(
        errors,
        "assistant.poll_interval_ms",
        assistant.poll_interval_ms,
        1,
        u64::MAX,
    );
    validate_below(
        errors,
        "assistant.poll_interval_ms",
        assistant.poll_interval_ms,
        "assistant.budget_ms",
        assistant.budget_ms,
    );
    validate_range(
        errors,
        "assistant.request_timeout_secs",
        assistant.request_timeout_secs,
        1,
        300,
    );
}

/// The feed timeout must be shorter than the request budget.
pub(crate) fn validate_catalog_timeout(errors: &mut Vec<String>, config: &ShowroomConfig) {
    validate_range(
        errors,
        "catalog.timeout_secs",
        config.catalog.timeout_secs,
        1,
        u64::MAX,
    );
    validate_below(
        errors,
        "catalog.timeout_secs (in ms)",
        config.catalog.timeout_secs.saturating_mul(1000),
        "assistant.budget_ms",
        config.assistant.budget_ms,
    );
}
