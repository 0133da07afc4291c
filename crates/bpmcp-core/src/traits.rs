use async_trait::async_trait;

use crate::error::Error;
use crate::types::{OutboundRequest, RemoteResponse};

/// Sends constructed requests to the remote editor server.
#[async_trait]
pub trait RemoteTransport: Send + Sync {
    /// Issue exactly one request and return the raw response.
    ///
    /// Any HTTP status is a successful send; only failures to obtain a
    /// response at all (connection, timeout) are errors.
    async fn send(&self, request: OutboundRequest) -> Result<RemoteResponse, Error>;
}
