//! Assistant runtime bridge for the showroom chat.
//!
//! Provides:
//! - An OpenAI Assistants API client (threads, messages, runs, tool outputs)
//! - The catalog tool definition and its dispatcher
//! - The run orchestrator: a bounded polling loop that drives one run to a
//!   terminal state or to a resolved catalog lookup inside a time budget

pub mod openai;
pub mod orchestrator;
pub mod tools;

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use showroom_common::ThreadId;

pub use openai::{OpenAiAssistant, OpenAiConfig};
pub use orchestrator::{ChatOutcome, ChatReply, Orchestrator, OrchestratorError, PollSettings};
pub use tools::{catalog_tool, DispatchError, Dispatched, ToolDispatcher, CATALOG_TOOL};

/// Operations consumed from the hosted assistant service.
///
/// Threads, messages, and runs live remotely; callers hold only their ids.
#[async_trait]
pub trait AssistantApi: Send + Sync {
    async fn create_thread(&self) -> Result<ThreadId, AssistantError>;

    async fn add_user_message(&self, thread: &ThreadId, content: &str)
        -> Result<(), AssistantError>;

    async fn create_run(&self, thread: &ThreadId) -> Result<Run, AssistantError>;

    async fn retrieve_run(&self, thread: &ThreadId, run_id: &str) -> Result<Run, AssistantError>;

    async fn submit_tool_outputs(
        &self,
        thread: &ThreadId,
        run_id: &str,
        outputs: &[ToolOutput],
    ) -> Result<(), AssistantError>;

    /// Text of the newest message in the thread, if there is one.
    async fn latest_message(&self, thread: &ThreadId) -> Result<Option<String>, AssistantError>;
}

/// Lifecycle state of a run as reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Queued,
    InProgress,
    RequiresAction,
    Cancelling,
    Completed,
    Failed,
    Cancelled,
    Expired,
    Incomplete,
    /// A status this client does not know; treated as still running.
    Unknown,
}

impl RunStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RunStatus::Queued => "queued",
            RunStatus::InProgress => "in_progress",
            RunStatus::RequiresAction => "requires_action",
            RunStatus::Cancelling => "cancelling",
            RunStatus::Completed => "completed",
            RunStatus::Failed => "failed",
            RunStatus::Cancelled => "cancelled",
            RunStatus::Expired => "expired",
            RunStatus::Incomplete => "incomplete",
            RunStatus::Unknown => "unknown",
        }
    }

    /// Terminal states that end the run without an answer.
    pub fn is_failure(self) -> bool {
        matches!(
            self,
            RunStatus::Failed | RunStatus::Cancelled | RunStatus::Expired | RunStatus::Incomplete
        )
    }
}

impl FromStr for RunStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "queued" => RunStatus::Queued,
            "in_progress" => RunStatus::InProgress,
            "requires_action" => RunStatus::RequiresAction,
            "cancelling" => RunStatus::Cancelling,
            "completed" => RunStatus::Completed,
            "failed" => RunStatus::Failed,
            "cancelled" => RunStatus::Cancelled,
            "expired" => RunStatus::Expired,
            "incomplete" => RunStatus::Incomplete,
            _ => RunStatus::Unknown,
        })
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub id: String,
    pub status: RunStatus,
    /// Function calls awaiting output; only populated in `requires_action`.
    pub tool_calls: Vec<ToolCall>,
}

/// A function the run wants executed locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    /// JSON-encoded argument object, exactly as the service sent it.
    pub arguments: String,
}

/// Output handed back to the run for one tool call.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ToolOutput {
    pub tool_call_id: String,
    pub output: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
}
