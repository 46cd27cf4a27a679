//! Mock OpenAI-compatible upstream for integration tests
//!
//! Serves `chat/completions` and `responses` under any prefix and records
//! every request it receives.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use tokio_util::sync::CancellationToken;

/// How the mock answers requests
#[derive(Clone, Copy)]
pub enum Behavior {
    /// Canned JSON matching the requested wire API
    Succeed,
    /// Fixed error status with a JSON error body
    Fail(StatusCode),
    /// 200 with a body that is not JSON
    Garbage,
}

/// A request as seen by the mock
#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub authorization: Option<String>,
    pub body: serde_json::Value,
}

struct MockState {
    behavior: Behavior,
    requests: Mutex<Vec<Recorded>>,
}

pub struct MockUpstream {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

impl MockUpstream {
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_with(Behavior::Succeed).await
    }

    pub async fn start_with(behavior: Behavior) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            behavior,
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

    /// Base URL with a `/v1` prefix and no trailing slash
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle(State(state): State<Arc<MockState>>, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    let path = uri.path().to_owned();
    let recorded = Recorded {
        path: path.clone(),
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned),
        body: serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null),
    };
    let model = recorded.body["model"].as_str().unwrap_or("mock-model").to_owned();
    state.requests.lock().unwrap().push(recorded);

    match state.behavior {
        Behavior::Fail(status) => (
            status,
            axum::Json(serde_json::json!({ "error": { "message": "mock failure" } })),
        )
            .into_response(),
        Behavior::Garbage => (StatusCode::OK, "definitely not json").into_response(),
        Behavior::Succeed if path.ends_with("/chat/completions") => axum::Json(serde_json::json!({
            "id": "chatcmpl-mock",
            "object": "chat.completion",
            "model": model,
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "Hello from mock upstream" },
                "finish_reason": "stop"
            }]
        }))
        .into_response(),
        Behavior::Succeed if path.ends_with("/responses") => axum::Json(serde_json::json!({
            "id": "resp-mock",
            "object": "response",
            "model": model,
            "output": [{
                "type": "message",
                "role": "assistant",
                "content": [{ "type": "output_text", "text": "Hello from mock upstream" }]
            }]
        }))
        .into_response(),
        Behavior::Succeed => StatusCode::NOT_FOUND.into_response(),
    }
}
