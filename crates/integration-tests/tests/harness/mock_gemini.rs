//! Mock Gemini backend for integration tests
//!
//! Serves `generateContent` with a canned reply and records what it received

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

/// Mock Gemini backend that returns predictable responses
pub struct MockGemini {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockGeminiState>,
}

/// A request as the mock saw it
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub call: String,
    pub api_key: Option<String>,
    pub body: Value,
}

enum Reply {
    Text(String),
    Error { status: StatusCode, message: String },
}

struct MockGeminiState {
    request_count: AtomicU32,
    reply: Reply,
    received: Mutex<Vec<ReceivedRequest>>,
}

impl MockGemini {
    /// Start a mock that answers every request with a fixed text
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(Reply::Text("Hello from mock Gemini".to_owned())).await
    }

    /// Start a mock that answers with a custom text
    pub async fn start_with_response(text: &str) -> anyhow::Result<Self> {
        Self::start_inner(Reply::Text(text.to_owned())).await
    }

    /// Start a mock that rejects every request with a Gemini error envelope
    pub async fn start_failing(status: u16, message: &str) -> anyhow::Result<Self> {
        let status = StatusCode::from_u16(status)?;
        Self::start_inner(Reply::Error {
            status,
            message: message.to_owned(),
        })
        .await
    }

    async fn start_inner(reply: Reply) -> anyhow::Result<Self> {
        let state = Arc::new(MockGeminiState {
            request_count: AtomicU32::new(0),
            reply,
            received: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/v1beta/models/{call}", routing::post(handle_generate_content))
            .with_state(Arc::clone(&state));

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

    /// Base URL for configuring the mock as the provider
    pub fn base_url(&self) -> String {
        format!("http://{}/v1beta", self.addr)
    }

    /// Number of `generateContent` requests received
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }

    /// The most recent request, if any
    pub fn last_request(&self) -> Option<ReceivedRequest> {
        self.state.received.lock().unwrap().last().cloned()
    }
}

impl Drop for MockGemini {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_generate_content(
    State(state): State<Arc<MockGeminiState>>,
    Path(call): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.request_count.fetch_add(1, Ordering::Relaxed);

    let api_key = headers
        .get("x-goog-api-key")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    state
        .received
        .lock()
        .unwrap()
        .push(ReceivedRequest { call, api_key, body });

    match &state.reply {
        Reply::Text(text) => Json(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "finishReason": "STOP",
                "index": 0
            }],
            "usageMetadata": {
                "promptTokenCount": 5,
                "candidatesTokenCount": 4,
                "totalTokenCount": 9
            }
        }))
        .into_response(),
        Reply::Error { status, message } => (
            *status,
            Json(json!({
                "error": {
                    "code": status.as_u16(),
                    "message": message,
                    "status": "INVALID_ARGUMENT"
                }
            })),
        )
            .into_response(),
    }
}
