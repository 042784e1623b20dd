//! Mock WordPress host for integration tests
//!
//! Serves the LLM Ready MCP routes with canned bodies and records every
//! request it receives

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

pub const NAMESPACE: &str = "/wp-json/llmr/mcp/v1";

/// Canned reply for one route
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// JSON body with the given status
    Json(StatusCode, Value),
    /// Raw body served as `text/html`
    Raw(StatusCode, String),
}

impl MockResponse {
    pub fn ok(value: Value) -> Self {
        Self::Json(StatusCode::OK, value)
    }
}

/// A request as seen by the mock
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

struct MockState {
    routes: HashMap<(Method, String), MockResponse>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Running mock WordPress server
pub struct MockWordPress {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

impl MockWordPress {
    /// Start with the default plugin responses
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_with([]).await
    }

    /// Start with some routes replaced
    ///
    /// Route paths are relative to the MCP namespace, e.g. `/search`
    pub async fn start_with<I>(overrides: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (Method, &'static str, MockResponse)>,
    {
        let mut routes = default_routes();
        for (method, path, response) in overrides {
            routes.insert((method, format!("{NAMESPACE}{path}")), response);
        }

        let state = Arc::new(MockState {
            routes,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new().fallback(handle).with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL of the WordPress install
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

impl Drop for MockWordPress {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// An address nothing is listening on
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{addr}")
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_owned();

    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        content_type: headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned),
        body: body.to_vec(),
    });

    match state.routes.get(&(method, path)) {
        Some(MockResponse::Json(status, value)) => (*status, axum::Json(value.clone())).into_response(),
        Some(MockResponse::Raw(status, text)) => (*status, [(CONTENT_TYPE, "text/html")], text.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            axum::Json(json!({
                "code": "rest_no_route",
                "message": "No route was found matching the URL and request method.",
                "data": {"status": 404}
            })),
        )
            .into_response(),
    }
}

fn default_routes() -> HashMap<(Method, String), MockResponse> {
    let route = |method: Method, path: &str, value: Value| ((method, format!("{NAMESPACE}{path}")), MockResponse::ok(value));

    HashMap::from([
        route(Method::POST, "/search", json!({"query": "", "results": [], "total": 0})),
        route(
            Method::GET,
            "/business",
            json!({"name": "Example Business", "description": "Just another WordPress site"}),
        ),
        route(
            Method::GET,
            "/discovery",
            json!({"mcp_version": "1.0", "capabilities": {"content_search": true, "booking": false}}),
        ),
        route(Method::GET, "/contact", json!({"email": "hello@example.com", "phone": ""})),
        route(Method::GET, "/services", json!({"services": [], "total": 0})),
        route(
            Method::GET,
            "/booking",
            json!({"available": false, "message": "Booking functionality is not enabled on this site."}),
        ),
    ])
}

/// An address that accepts connections but never answers
pub async fn silent_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });

    format!("http://{addr}")
}
