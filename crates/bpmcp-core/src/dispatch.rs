use serde_json::{Map, Value};

use crate::catalog::find_operation;
use crate::error::Error;
use crate::request::build_request;
use crate::traits::RemoteTransport;
use crate::types::RemoteResponse;

/// Look up a tool, build its request, and forward it through the transport.
///
/// # Errors
///
/// Returns [`Error::UnknownTool`] for a name outside the catalog, binding
/// errors for bad arguments, and whatever the transport reports.
pub async fn dispatch(
    transport: &dyn RemoteTransport,
    tool: &str,
    args: &Map<String, Value>,
) -> Result<RemoteResponse, Error> {
    let op = find_operation(tool).ok_or_else(|| Error::UnknownTool(tool.to_string()))?;
    let request = build_request(op, args)?;

    tracing::info!(tool, method = %request.method, path = request.path, "Dispatching tool call");

    let response = transport.send(request).await.inspect_err(|e| {
        tracing::warn!(tool, error = %e, "Remote call failed");
    })?;

    tracing::debug!(tool, status = response.status, "Remote call returned");
    Ok(response)
}
