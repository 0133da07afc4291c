use std::io::Write;

use serde_json::{json, Value};

use bpmcp_mcp::{ToolCallResult, ToolContent};

use crate::client::McpClient;

/// Invoke one tool and print the editor's response text unchanged.
pub async fn run(client: &McpClient, tool: &str, args: Option<&str>) -> anyhow::Result<()> {
    let arguments: Value = match args {
        Some(raw) => serde_json::from_str(raw)?,
        None => json!({}),
    };
    if !arguments.is_object() {
        anyhow::bail!("--args must be a JSON object");
    }

    let result = client
        .request("tools/call", json!({ "name": tool, "arguments": arguments }))
        .await?;
    let result: ToolCallResult = serde_json::from_value(result)?;

    if result.is_error {
        tracing::warn!("Editor reported an error for '{tool}'");
    }

    let mut stdout = std::io::stdout().lock();
    write_text(&mut stdout, &result)?;
    stdout.flush()?;

    Ok(())
}

/// Write every text block as-is, with no added separators or newline.
fn write_text(out: &mut impl Write, result: &ToolCallResult) -> std::io::Result<()> {
    for content in &result.content {
        let ToolContent::Text { text } = content;
        out.write_all(text.as_bytes())?;
    }
    Ok(())
}
