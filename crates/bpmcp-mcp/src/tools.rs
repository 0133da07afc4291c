use bpmcp_core::{ArgKind, ArgSpec, Operation, RemoteResponse, OPERATIONS};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Definition of an MCP tool exposed to the calling agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

impl ToolDefinition {
    /// Render a catalog entry as an MCP tool definition.
    #[must_use]
    pub fn from_operation(op: &Operation) -> Self {
        let properties: Map<String, Value> = op
            .args
            .iter()
            .map(|arg| (arg.name.to_string(), property_schema(arg)))
            .collect();

        let required: Vec<&str> = op
            .args
            .iter()
            .filter(|arg| arg.required)
            .map(|arg| arg.name)
            .collect();

        Self {
            name: op.name.to_string(),
            description: op.description.to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": properties,
                "required": required
            }),
        }
    }
}

fn property_schema(arg: &ArgSpec) -> Value {
    let mut schema = serde_json::json!({
        "type": arg.kind.schema_type(),
        "description": arg.description,
    });

    match arg.kind {
        ArgKind::TextMap => {
            schema["additionalProperties"] = serde_json::json!({ "type": "string" });
        }
        ArgKind::Flag if !arg.required => {
            schema["default"] = Value::Bool(false);
        }
        ArgKind::Text if !arg.required => {
            schema["default"] = Value::String(String::new());
        }
        _ => {}
    }

    schema
}

/// One content block of a tool result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    Text { text: String },
}

/// Result payload of a `tools/call` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCallResult {
    pub content: Vec<ToolContent>,
    #[serde(rename = "isError", default, skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl From<RemoteResponse> for ToolCallResult {
    /// The remote body becomes the text verbatim; a non-2xx status only sets
    /// the error marker.
    fn from(resp: RemoteResponse) -> Self {
        Self {
            is_error: !resp.is_success(),
            content: vec![ToolContent::Text { text: resp.body }],
        }
    }
}

/// Registry of all MCP tools backed by the Blueprint operation catalog.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Return the list of tool definitions for the MCP `tools/list` method.
    #[must_use]
    pub fn definitions() -> Vec<ToolDefinition> {
        OPERATIONS.iter().map(ToolDefinition::from_operation).collect()
    }
}
