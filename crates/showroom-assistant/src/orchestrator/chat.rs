//! One chat turn: thread, message, run, and the bounded polling loop.

use std::sync::Arc;

use showroom_catalog::CarQueryResult;
use showroom_common::ThreadId;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn, Span};

use crate::tools::ToolDispatcher;
use crate::{AssistantApi, Run};

use super::policy::{next_step, PollStep};
use super::types::{ChatOutcome, ChatReply, OrchestratorError, PollSettings};
use super::messages;

/// Drives assistant runs for chat requests.
///
/// Stateless between requests: conversation state lives in the remote
/// thread, so one instance serves any number of concurrent turns.
pub struct Orchestrator {
    api: Arc<dyn AssistantApi>,
    dispatcher: ToolDispatcher,
    settings: PollSettings,
}

impl Orchestrator {
    pub fn new(api: Arc<dyn AssistantApi>, dispatcher: ToolDispatcher, settings: PollSettings) -> Self {
        Self {
            api,
            dispatcher,
            settings,
        }
    }

    /// Send `message` on `thread_id` (or a new thread) and wait for the outcome.
    ///
    /// Timeouts and failed runs are outcomes, not errors; errors are API
    /// failures and malformed tool arguments.
    pub async fn chat(
        &self,
        thread_id: Option<ThreadId>,
        message: &str,
    ) -> Result<ChatReply, OrchestratorError> {
        let started = Instant::now();
        let thread = match thread_id {
            Some(thread) => thread,
            None => {
                let thread = self.api.create_thread().await?;
                info!(thread_id = %thread, "Created thread");
                thread
            }
        };
        Span::current().record("thread_id", thread.as_str());

        self.api.add_user_message(&thread, message).await?;
        let run = self.api.create_run(&thread).await?;
        debug!(run_id = %run.id, "Run started");

        let outcome = self.drive_run(&thread, &run.id, started).await?;
        Ok(ChatReply {
            thread_id: thread,
            outcome,
        })
    }

    /// Poll `run_id` until it needs the catalog, finishes, fails, or the budget runs out.
    ///
    /// The budget counts from `started`, so thread and run setup use it up too.
    async fn drive_run(
        &self,
        thread: &ThreadId,
        run_id: &str,
        started: Instant,
    ) -> Result<ChatOutcome, OrchestratorError> {
        let mut observed: Option<Run> = None;

        loop {
            let status = observed.as_ref().map(|run| run.status);
            match next_step(status, started.elapsed(), self.settings.budget) {
                PollStep::Poll => match observed.take() {
                    Some(run) => {
                        debug!(run_id, status = %run.status, "Run pending");
                        sleep(self.settings.interval).await;
                    }
                    None => observed = Some(self.api.retrieve_run(thread, run_id).await?),
                },
                PollStep::ResolveToolCall => {
                    if let Some(run) = observed.take() {
                        if let Some(result) = self.resolve_tool_call(thread, &run).await? {
                            return Ok(ChatOutcome::Catalog(result));
                        }
                    }
                    sleep(self.settings.interval).await;
                }
                PollStep::Completed => {
                    let text = self.api.latest_message(thread).await?;
                    info!(run_id, "Run completed");
                    return Ok(ChatOutcome::Answer(
                        text.unwrap_or_else(|| messages::EMPTY_RESPONSE.to_string()),
                    ));
                }
                PollStep::Ended(status) => {
                    warn!(run_id, %status, "Run ended without an answer");
                    return Ok(ChatOutcome::RunEnded(status));
                }
                PollStep::TimedOut => {
                    warn!(
                        run_id,
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "Run did not finish within budget"
                    );
                    return Ok(ChatOutcome::TimedOut);
                }
            }
        }
    }

    /// Act on the first pending call of a run in `requires_action`.
    ///
    /// Returns the catalog result as soon as the acknowledgment is sent;
    /// the run's own reply is never awaited. `None` means nothing was
    /// resolved and polling should go on.
    async fn resolve_tool_call(
        &self,
        thread: &ThreadId,
        run: &Run,
    ) -> Result<Option<CarQueryResult>, OrchestratorError> {
        let Some(call) = run.tool_calls.first() else {
            warn!(run_id = %run.id, "Run requires action but has no function call");
            return Ok(None);
        };
        if run.tool_calls.len() > 1 {
            debug!(
                run_id = %run.id,
                pending = run.tool_calls.len(),
                "Acting on the first function call only"
            );
        }

        let Some(dispatched) = self.dispatcher.dispatch(call).await? else {
            return Ok(None);
        };

        if let Err(e) = self
            .api
            .submit_tool_outputs(thread, &run.id, std::slice::from_ref(&dispatched.output))
            .await
        {
            warn!(run_id = %run.id, error = %e, "Failed to submit tool output");
        }

        info!(
            run_id = %run.id,
            cars = dispatched.result.cars.len(),
            "Returning catalog result"
        );
        Ok(Some(dispatched.result))
    }
}
