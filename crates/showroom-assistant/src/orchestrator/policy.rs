//! Decision function of the run polling loop.

use std::time::Duration;

use crate::RunStatus;

/// What the loop does next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollStep {
    /// Still running: fetch a fresh status (or wait first, if one was just seen).
    Poll,
    /// The run is blocked on a function call.
    ResolveToolCall,
    /// The run finished; its reply can be read.
    Completed,
    /// The run stopped without an answer.
    Ended(RunStatus),
    /// The budget is spent.
    TimedOut,
}

/// Decide the next step from the last observed status and the time spent.
///
/// `status` is `None` when no fresh status is at hand. An actionable status
/// wins over the budget, so a status fetched just past the deadline is
/// still honored; the budget only stops further polling.
pub fn next_step(status: Option<RunStatus>, elapsed: Duration, budget: Duration) -> PollStep {
    match status {
        Some(RunStatus::RequiresAction) => PollStep::ResolveToolCall,
        Some(RunStatus::Completed) => PollStep::Completed,
        Some(s) if s.is_failure() => PollStep::Ended(s),
        _ if elapsed > budget => PollStep::TimedOut,
        _ => PollStep::Poll,
    }
}
