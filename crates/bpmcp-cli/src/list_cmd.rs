use serde_json::json;

use bpmcp_mcp::ToolDefinition;

use crate::client::McpClient;

/// Print every tool the server exposes.
pub async fn run(client: &McpClient) -> anyhow::Result<()> {
    let result = client.request("tools/list", json!({})).await?;
    let tools: Vec<ToolDefinition> = serde_json::from_value(result["tools"].clone())?;

    for tool in tools {
        println!("{:<36} {}", tool.name, tool.description);
    }

    Ok(())
}
