use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use bpmcp_mcp::jsonrpc::{INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR};
use bpmcp_mcp::{JsonRpcRequest, JsonRpcResponse, ToolCallResult, ToolRegistry};

use crate::app_state::AppState;

const PROTOCOL_VERSION: &str = "2024-11-05";

/// Handle MCP JSON-RPC requests (Streamable HTTP transport).
///
/// Requests are answered directly in the response body. Notifications get
/// `202 Accepted` with no body.
pub async fn mcp_request(State(state): State<AppState>, body: Bytes) -> Response {
    let value: Value = match serde_json::from_slice(&body) {
        Ok(v) => v,
        Err(e) => {
            let resp = JsonRpcResponse::error(Value::Null, PARSE_ERROR, format!("Parse error: {e}"));
            return (StatusCode::BAD_REQUEST, Json(resp)).into_response();
        }
    };

    let request_id = value.get("id").cloned().unwrap_or(Value::Null);
    let req: JsonRpcRequest = match serde_json::from_value(value) {
        Ok(r) => r,
        Err(e) => {
            let resp =
                JsonRpcResponse::error(request_id, INVALID_REQUEST, format!("Invalid request: {e}"));
            return (StatusCode::BAD_REQUEST, Json(resp)).into_response();
        }
    };

    if req.is_notification() {
        tracing::info!("Received MCP notification: {}", req.method);
        // Still executed; a notification only forbids the reply.
        if req.method == "tools/call" {
            handle_tools_call(&state, &req).await;
        }
        return StatusCode::ACCEPTED.into_response();
    }

    let response = match req.method.as_str() {
        "initialize" => handle_initialize(&req),
        "ping" => JsonRpcResponse::success(req.id.clone(), serde_json::json!({})),
        "tools/list" => handle_tools_list(&req),
        "tools/call" => handle_tools_call(&state, &req).await,
        _ => JsonRpcResponse::error(req.id.clone(), METHOD_NOT_FOUND, "Method not found"),
    };

    Json(response).into_response()
}

fn handle_initialize(req: &JsonRpcRequest) -> JsonRpcResponse {
    tracing::info!("MCP client initializing");
    JsonRpcResponse::success(
        req.id.clone(),
        serde_json::json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": "bpmcp",
                "version": env!("CARGO_PKG_VERSION")
            }
        }),
    )
}

fn handle_tools_list(req: &JsonRpcRequest) -> JsonRpcResponse {
    let tools = ToolRegistry::definitions();
    JsonRpcResponse::success(req.id.clone(), serde_json::json!({ "tools": tools }))
}

async fn handle_tools_call(state: &AppState, req: &JsonRpcRequest) -> JsonRpcResponse {
    let Some(params) = &req.params else {
        return JsonRpcResponse::error(req.id.clone(), INVALID_PARAMS, "Missing params");
    };

    let Some(tool_name) = params.get("name").and_then(Value::as_str) else {
        return JsonRpcResponse::error(req.id.clone(), INVALID_PARAMS, "Missing tool name");
    };

    let empty = serde_json::Map::new();
    let arguments = match params.get("arguments") {
        None | Some(Value::Null) => &empty,
        Some(Value::Object(map)) => map,
        Some(_) => {
            return JsonRpcResponse::error(
                req.id.clone(),
                INVALID_PARAMS,
                "Tool arguments must be an object",
            );
        }
    };

    match bpmcp_core::dispatch(state.transport.as_ref(), tool_name, arguments).await {
        Ok(resp) => {
            let result = ToolCallResult::from(resp);
            JsonRpcResponse::success(
                req.id.clone(),
                serde_json::to_value(&result).unwrap_or_default(),
            )
        }
        Err(err) => JsonRpcResponse::from_tool_error(req.id.clone(), &err),
    }
}
