//! The catalog function the assistant can call, and its dispatcher.

mod definitions;
mod dispatcher;

pub use definitions::{catalog_tool, ToolDefinition, CATALOG_TOOL};
pub use dispatcher::{DispatchError, Dispatched, ToolDispatcher, DEFAULT_ACKNOWLEDGMENT};
