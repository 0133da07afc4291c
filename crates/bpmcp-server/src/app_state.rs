use std::sync::Arc;

use bpmcp_core::traits::RemoteTransport;

/// Shared application state with injected dependencies.
#[derive(Clone)]
pub struct AppState {
    pub transport: Arc<dyn RemoteTransport>,
}
