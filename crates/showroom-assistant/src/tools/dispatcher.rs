//! Executes the function calls a run asks for.

use std::sync::Arc;

use serde::Deserialize;
use showroom_catalog::{CarQueryResult, Catalog};
use tracing::{info, warn};

use crate::{ToolCall, ToolOutput};

use super::definitions::CATALOG_TOOL;

/// Acknowledgment sent back to the run when none is configured.
pub const DEFAULT_ACKNOWLEDGMENT: &str = "Done.";

#[derive(Debug, Default, Deserialize)]
struct CatalogArgs {
    #[serde(default)]
    model_filter: Option<String>,
}

/// A resolved tool call: the payload for the caller and the output owed to the run.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatched {
    pub result: CarQueryResult,
    pub output: ToolOutput,
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: String, reason: String },
}

pub struct ToolDispatcher {
    catalog: Arc<dyn Catalog>,
    acknowledgment: String,
}

impl ToolDispatcher {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self {
            catalog,
            acknowledgment: DEFAULT_ACKNOWLEDGMENT.to_string(),
        }
    }

    pub fn with_acknowledgment(mut self, acknowledgment: impl Into<String>) -> Self {
        self.acknowledgment = acknowledgment.into();
        self
    }

    /// Run the catalog lookup for a recognized call.
    ///
    /// Returns `Ok(None)` for any other function name; the run is left
    /// waiting and the caller decides how to proceed.
    pub async fn dispatch(&self, call: &ToolCall) -> Result<Option<Dispatched>, DispatchError> {
        if call.name != CATALOG_TOOL {
            warn!(tool = %call.name, call_id = %call.id, "Unrecognized tool call");
            return Ok(None);
        }

        let args = parse_args(call)?;
        let filter = args.model_filter.as_deref().filter(|f| !f.trim().is_empty());
        info!(call_id = %call.id, model_filter = ?filter, "Looking up available cars");

        let result = self.catalog.get_available_cars(filter).await;
        Ok(Some(Dispatched {
            result,
            output: ToolOutput {
                tool_call_id: call.id.clone(),
                output: self.acknowledgment.clone(),
            },
        }))
    }
}

fn parse_args(call: &ToolCall) -> Result<CatalogArgs, DispatchError> {
    if call.arguments.trim().is_empty() {
        return Ok(CatalogArgs::default());
    }
    serde_json::from_str(&call.arguments).map_err(|e| DispatchError::InvalidArguments {
        tool: call.name.clone(),
        reason: e.to_string(),
    })
}
