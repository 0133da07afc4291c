use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use bpmcp_remote::HttpTransport;
use bpmcp_server::app_state::AppState;
use bpmcp_server::config::ServerConfig;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ServerConfig::from_env().expect("Invalid configuration");

    let transport = HttpTransport::new(&config.remote_base_url, config.remote_timeout)
        .expect("Failed to create remote transport");

    tracing::info!(
        "Forwarding Blueprint tools to {} (timeout {:?})",
        transport.base_url(),
        config.remote_timeout
    );

    let state = AppState {
        transport: Arc::new(transport),
    };

    let app = bpmcp_server::router::create_router(state);

    let addr = config.listen_addr();
    tracing::info!("bpmcp server listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
