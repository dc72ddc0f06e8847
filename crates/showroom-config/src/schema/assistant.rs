//! Assistant runtime connection and run polling settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings for talking to the hosted assistant and polling its runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Base URL of the Assistants API.
    pub api_base: String,
    /// Per-call HTTP timeout in seconds.
    pub request_timeout_secs: u64,
    /// Fixed delay between run status checks.
    pub poll_interval_ms: u64,
    /// Wall-clock budget for a whole chat request.
    pub budget_ms: u64,
    /// Execution limit imposed by the hosting platform. The budget must stay below it.
    pub platform_limit_ms: u64,
    /// Output submitted for a resolved tool call so the run can proceed.
    pub tool_output: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.openai.com/v1".into(),
            request_timeout_secs: 8,
            poll_interval_ms: 500,
            budget_ms: 9500,
            platform_limit_ms: 10_000,
            tool_output: "Done.".into(),
        }
    }
}

impl AssistantConfig {
    pub fn budget(&self) -> Duration {
        Duration::from_millis(self.budget_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
