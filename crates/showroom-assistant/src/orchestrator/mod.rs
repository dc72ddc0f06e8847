//! Run orchestration.
//!
//! An `Orchestrator` turns one chat message into one assistant run and
//! polls that run, within a wall-clock budget, until it completes, fails,
//! or asks for the catalog. The polling decision itself is the pure
//! [`next_step`] function.

mod chat;
pub mod messages;
mod policy;
mod types;


pub use chat::Orchestrator;
pub use policy::{next_step, PollStep};
pub use types::{ChatOutcome, ChatReply, OrchestratorError, PollSettings};
