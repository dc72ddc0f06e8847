//! Function definitions registered on the assistant.

use serde::Serialize;

/// Name of the single function the assistant may call.
pub const CATALOG_TOOL: &str = "get_available_cars";

#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

impl ToolDefinition {
    /// Function tool in the Assistants API format.
    pub fn to_openai_tool(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "function",
            "function": {
                "name": self.name,
                "description": self.description,
                "parameters": self.parameters,
            }
        })
    }
}

/// The inventory lookup exposed to the assistant.
pub fn catalog_tool() -> ToolDefinition {
    ToolDefinition {
        name: CATALOG_TOOL.to_string(),
        description: "Look up new Peugeot cars currently in stock at the dealer, cheapest \
                      first. Use it whenever the customer asks what is available or what a \
                      model costs."
            .to_string(),
        parameters: serde_json::json!({
            "type": "object",
            "properties": {
                "model_filter": {
                    "type": "string",
                    "description": "Part of the model name to narrow the search, e.g. '208' or '3008'"
                }
            },
            "required": []
        }),
    }
}
