//! Orchestrator settings, results, and errors.

use std::time::Duration;

use showroom_catalog::{CarQueryResult, CarRecord};
use showroom_common::ThreadId;

use crate::{AssistantError, DispatchError, RunStatus};

use super::messages;

/// Timing of the polling loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    /// Wall-clock time the loop may spend before giving up.
    pub budget: Duration,
    /// Pause between status fetches.
    pub interval: Duration,
}

impl PollSettings {
    pub fn new(budget: Duration, interval: Duration) -> Self {
        Self { budget, interval }
    }
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            budget: Duration::from_millis(9_500),
            interval: Duration::from_millis(500),
        }
    }
}

/// How a chat turn ended.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatOutcome {
    /// The run completed; text of the newest thread message.
    Answer(String),
    /// The run asked for the catalog; its result replaces any narrated reply.
    Catalog(CarQueryResult),
    /// The run stopped in a failure status.
    RunEnded(RunStatus),
    /// The budget ran out first.
    TimedOut,
}

/// Result of one chat turn, tied to the thread it ran on.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub thread_id: ThreadId,
    pub outcome: ChatOutcome,
}

impl ChatReply {
    /// Text shown to the customer.
    pub fn response_text(&self) -> String {
        match &self.outcome {
            ChatOutcome::Answer(text) => text.clone(),
            ChatOutcome::Catalog(result) => result.summary.clone(),
            ChatOutcome::RunEnded(status) => messages::run_ended(*status),
            ChatOutcome::TimedOut => messages::TIMEOUT.to_string(),
        }
    }

    /// Cars to attach, present only for a resolved catalog lookup.
    pub fn cars(&self) -> Option<&[CarRecord]> {
        match &self.outcome {
            ChatOutcome::Catalog(result) => Some(&result.cars),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OrchestratorError {
    #[error(transparent)]
    Assistant(#[from] AssistantError),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(outcome: ChatOutcome) -> ChatReply {
        ChatReply {
            thread_id: ThreadId::new("thread_1"),
            outcome,
        }
    }

    #[test]
    fn response_text_per_outcome() {
        assert_eq!(reply(ChatOutcome::Answer("Здравейте".into())).response_text(), "Здравейте");
        assert_eq!(reply(ChatOutcome::TimedOut).response_text(), messages::TIMEOUT);
        assert_eq!(
            reply(ChatOutcome::RunEnded(RunStatus::Failed)).response_text(),
            "Грешка: Обработката спря със статус 'failed'."
        );
    }

    #[test]
    fn cars_only_for_catalog_outcome() {
        let result = CarQueryResult::from_selection(Vec::new(), None);
        let catalog = reply(ChatOutcome::Catalog(result.clone()));
        assert_eq!(catalog.response_text(), result.summary);
        assert_eq!(catalog.cars(), Some(&[][..]));

        assert!(reply(ChatOutcome::Answer("hi".into())).cars().is_none());
        assert!(reply(ChatOutcome::TimedOut).cars().is_none());
    }

    #[test]
    fn default_settings_fit_the_platform_limit() {
        let settings = PollSettings::default();
        assert_eq!(settings.budget, Duration::from_millis(9_500));
        assert_eq!(settings.interval, Duration::from_millis(500));
    }
}
