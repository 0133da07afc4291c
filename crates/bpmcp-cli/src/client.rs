use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::Client;
use serde_json::Value;

use bpmcp_mcp::{JsonRpcRequest, JsonRpcResponse};

/// Minimal MCP client speaking JSON-RPC to a bpmcp server over HTTP.
pub struct McpClient {
    client: Client,
    endpoint: String,
    next_id: AtomicU64,
}

impl McpClient {
    pub fn new(server_url: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}/mcp", server_url.trim_end_matches('/')),
            next_id: AtomicU64::new(1),
        }
    }

    /// Send one request and return its `result`, failing on a JSON-RPC error.
    pub async fn request(&self, method: &str, params: Value) -> anyhow::Result<Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let req = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Value::from(id),
            method: method.to_string(),
            params: Some(params),
        };

        tracing::debug!("-> {} {}", self.endpoint, method);
        let resp: JsonRpcResponse = self
            .client
            .post(&self.endpoint)
            .json(&req)
            .send()
            .await?
            .json()
            .await?;

        if let Some(error) = resp.error {
            anyhow::bail!("{} (code {})", error.message, error.code);
        }

        Ok(resp.result.unwrap_or(Value::Null))
    }
}
