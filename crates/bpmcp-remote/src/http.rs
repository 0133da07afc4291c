//! HTTP transport to the Unreal Engine editor automation server.

use std::time::Duration;

use async_trait::async_trait;
use bpmcp_core::{Error, HttpMethod, OutboundRequest, Payload, RemoteResponse, RemoteTransport};
use reqwest::Client;
use url::Url;

use crate::error::RemoteError;

/// `reqwest`-backed transport with a fixed base URL and request timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not parse, is not `http` or
    /// `https`, or the client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RemoteError> {
        let parsed = Url::parse(base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(RemoteError::UnsupportedScheme(parsed.scheme().to_string()));
        }
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base_url}{path}`, keeping any path prefix on the base URL.
    fn build_url(&self, path: &str) -> Result<Url, RemoteError> {
        Ok(Url::parse(&format!("{}{path}", self.base_url))?)
    }

    async fn execute(&self, request: OutboundRequest) -> Result<RemoteResponse, RemoteError> {
        let url = self.build_url(request.path)?;
        tracing::debug!(method = %request.method, url = %url, "Remote request");

        let builder = match request.method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
        };

        let builder = match &request.payload {
            Payload::Empty => builder,
            Payload::Json(body) => builder.json(body),
            Payload::Query(params) => builder.query(params),
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(RemoteResponse { status, body })
    }
}

#[async_trait]
impl RemoteTransport for HttpTransport {
    async fn send(&self, request: OutboundRequest) -> Result<RemoteResponse, Error> {
        Ok(self.execute(request).await?)
    }
}

#[cfg(test)]
mod tests {
    use bpmcp_core::dispatch;
    use serde_json::{json, Map, Value};
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn transport(base_url: &str) -> HttpTransport {
        HttpTransport::new(base_url, Duration::from_secs(5)).unwrap()
    }

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[tokio::test]
    async fn posts_json_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/create_bp"))
            .and(body_json(json!({"ParentClass": "Actor", "BpPath": "/Game/Test/MyBP"})))
            .respond_with(ResponseTemplate::new(200).set_body_string("Blueprint created"))
            .expect(1)
            .mount(&server)
            .await;

        let resp = dispatch(
            &transport(&server.uri()),
            "create_blueprint",
            &args(json!({"parent_class": "Actor", "bp_path": "/Game/Test/MyBP"})),
        )
        .await
        .unwrap();

        assert_eq!(resp.status, 200);
        assert_eq!(resp.body, "Blueprint created");
    }

    #[tokio::test]
    async fn gets_with_query_parameters() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/get_graph"))
            .and(query_param("bp_path", "/Game/Test/MyBP"))
            .and(query_param("graph_name", "EventGraph"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"Nodes":[]}"#))
            .expect(1)
            .mount(&server)
            .await;

        let resp = dispatch(
            &transport(&server.uri()),
            "get_graph",
            &args(json!({"bp_path": "/Game/Test/MyBP", "graph_name": "EventGraph"})),
        )
        .await
        .unwrap();

        assert_eq!(resp.body, r#"{"Nodes":[]}"#);
    }

    #[tokio::test]
    async fn compile_posts_query_with_empty_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/compile_blueprint"))
            .and(query_param("bp_path", "/Game/Test/MyBP"))
            .respond_with(ResponseTemplate::new(200).set_body_string("Compiled"))
            .expect(1)
            .mount(&server)
            .await;

        dispatch(
            &transport(&server.uri()),
            "compile_blueprint",
            &args(json!({"bp_path": "/Game/Test/MyBP"})),
        )
        .await
        .unwrap();

        let received = server.received_requests().await.unwrap();
        assert_eq!(received.len(), 1);
        assert!(received[0].body.is_empty());
    }

    #[tokio::test]
    async fn event_signature_absent_on_the_wire() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/add_event_to_graph"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .mount(&server)
            .await;

        dispatch(
            &transport(&server.uri()),
            "add_event_to_graph",
            &args(json!({
                "bp_path": "/Game/BP",
                "graph_name": "EventGraph",
                "event_name": "ReceiveHit",
                "is_custom": false,
                "event_signature": "int32 X"
            })),
        )
        .await
        .unwrap();

        let received = server.received_requests().await.unwrap();
        let body: Value = serde_json::from_slice(&received[0].body).unwrap();
        assert!(body.get("EventSignature").is_none());
        assert_eq!(body["bIsCustomEvent"], false);
    }

    #[tokio::test]
    async fn error_status_body_passes_through() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/get_components_of_bp"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_string("Error: Failed to load Blueprint from path"),
            )
            .mount(&server)
            .await;

        let resp = dispatch(
            &transport(&server.uri()),
            "get_components_of_bp",
            &args(json!({"bp_path": "/Game/Nope"})),
        )
        .await
        .unwrap();

        assert_eq!(resp.status, 500);
        assert_eq!(resp.body, "Error: Failed to load Blueprint from path");
    }

    #[tokio::test]
    async fn body_is_returned_verbatim() {
        let server = MockServer::start().await;
        let raw = "  [\"K2Node_IfThenElse\",\n \"K2Node_Select\"]  \n";

        Mock::given(method("GET"))
            .and(path("/get_supported_nodes"))
            .respond_with(ResponseTemplate::new(200).set_body_string(raw))
            .mount(&server)
            .await;

        let resp = dispatch(&transport(&server.uri()), "get_supported_nodes", &Map::new())
            .await
            .unwrap();
        assert_eq!(resp.body, raw);
    }

    #[tokio::test]
    async fn base_url_path_prefix_is_kept() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/editor/get_supported_nodes"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = transport(&format!("{}/editor/", server.uri()));
        assert!(transport.base_url().ends_with("/editor"));
        dispatch(&transport, "get_supported_nodes", &Map::new())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn connection_refused_is_an_error() {
        let transport = transport("http://127.0.0.1:1");
        let err = dispatch(
            &transport,
            "get_blueprint_functions",
            &args(json!({"bp_path": "/Game/BP"})),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, Error::Transport(_)));
    }

    #[tokio::test]
    async fn timeout_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/get_supported_nodes"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(&server.uri(), Duration::from_millis(100)).unwrap();
        let err = dispatch(&transport, "get_supported_nodes", &Map::new())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }

    #[test]
    fn rejects_malformed_base_url() {
        let err = HttpTransport::new("not a url", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, RemoteError::InvalidUrl(_)));
    }

    #[test]
    fn rejects_base_url_without_http_scheme() {
        let err = HttpTransport::new("localhost:8080", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, RemoteError::UnsupportedScheme(ref s) if s == "localhost"));

        let err = HttpTransport::new("ftp://editor:21", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, RemoteError::UnsupportedScheme(_)));

        assert!(HttpTransport::new("https://editor.local:8443/", Duration::from_secs(1)).is_ok());
    }
}
